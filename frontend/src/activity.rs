use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};
use yew::Callback;
use tracing::warn;

pub const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "mousedown", "keypress", "scroll", "touchstart"];

/// Document-level listeners that report any user interaction. Listeners are
/// removed when this is dropped.
pub struct ActivityListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl ActivityListener {
    pub fn attach(on_activity: Callback<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::wrap(Box::new(move |_: Event| {
            on_activity.emit(());
        }) as Box<dyn FnMut(Event)>);

        for event in ACTIVITY_EVENTS {
            if let Err(e) = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
                warn!("Failed to listen for {}: {:?}", event, e);
            }
        }

        Some(Self { document, closure })
    }
}

impl Drop for ActivityListener {
    fn drop(&mut self) {
        for event in ACTIVITY_EVENTS {
            let _ = self.document.remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref());
        }
    }
}
