use yew::prelude::*;

mod activity;
mod config;
mod console_log;
mod dialogs;
mod render;
mod styles;
mod survey;
mod timer;
mod vote_logger;

use crate::{config::CONFIG, survey::Survey};

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900 pt-8">
            <Survey />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    console_log::init(CONFIG.log_filter);
    yew::Renderer::<App>::new().render();
}
