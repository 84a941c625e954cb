use yew::prelude::*;
use shared::{Breakdown, Category, CategoryView, Color, Dashboard, ScheduleWindow};
use crate::styles::*;

pub struct PanelCallbacks {
    pub on_vote: Callback<(Category, Color)>,
    pub on_unlock: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

fn render_clock(clock: &str, on_unlock: &Callback<MouseEvent>) -> Html {
    html! {
        <div class={combine_classes(FLEX_BETWEEN, "mb-6")}>
            <button type="button" title="Desbloquear" class={BUTTON_ICON} onclick={on_unlock.clone()}>
                {"🕒"}
            </button>
            <span id="current-datetime" class={TEXT_MUTED}>{clock.to_string()}</span>
        </div>
    }
}

fn render_bar(category: Category, color: Color, breakdown: &Breakdown) -> Html {
    let id = format!("{}-{}", category.id(), color.id());
    html! {
        <div class={FLEX_BETWEEN}>
            <div class={BAR_TRACK}>
                <div
                    id={format!("{}-bar", id)}
                    class={bar_fill(color)}
                    style={format!("width: {}%", breakdown.get(color))}
                />
            </div>
            <span id={format!("{}-count", id)} class={TEXT_PERCENT}>
                {format!("{}%", breakdown.display(color))}
            </span>
        </div>
    }
}

fn render_category(view: &CategoryView, on_vote: &Callback<(Category, Color)>) -> Html {
    let category = view.category;
    html! {
        <div class={CARD_SECTION} id={category.id()}>
            <h2 class={HEADING_SM}>{category.label()}</h2>
            <div class={GRID_COLS_3}>
                {for Color::ALL.into_iter().map(|color| html! {
                    <button
                        type="button"
                        title={color.id()}
                        class={vote_button(color)}
                        onclick={on_vote.reform(move |_: MouseEvent| (category, color))}
                    >
                        {face(color)}
                    </button>
                })}
            </div>
            <div class={SPACE_Y_BASE}>
                {for Color::ALL.into_iter().map(|color| render_bar(category, color, &view.breakdown))}
            </div>
        </div>
    }
}

fn render_overlay(unlocked: bool, windows: &[ScheduleWindow]) -> Html {
    if unlocked {
        return html! {};
    }
    html! {
        <div id="disabled-overlay" class={OVERLAY}>
            <p class="text-xl font-semibold text-gray-100">{"Votación cerrada"}</p>
            <p class={TEXT_MUTED}>{"Horario disponible:"}</p>
            <ul class={TEXT_MUTED}>
                {for windows.iter().map(|w| html! {
                    <li>{format!("{} – {}", w.start, w.end)}</li>
                })}
            </ul>
        </div>
    }
}

fn render_aggregate(aggregate: &Breakdown) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, "mt-6")}>
            <h2 class={HEADING_SM}>{"Satisfacción general"}</h2>
            <div class={BAR_STACK}>
                {for Color::ALL.into_iter().map(|color| html! {
                    <div
                        id={format!("general-{}-bar", color.id())}
                        class={bar_fill(color)}
                        style={format!("width: {}%", aggregate.get(color))}
                    />
                })}
            </div>
        </div>
    }
}

pub fn render_panel(dash: &Dashboard, windows: &[ScheduleWindow], callbacks: &PanelCallbacks) -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Encuesta de satisfacción"}</h1>
            {render_clock(&dash.clock, &callbacks.on_unlock)}
            <div class="relative">
                <div
                    id="satisfaction-panel"
                    class={classes!(PANEL, (!dash.unlocked).then_some(PANEL_DISABLED))}
                >
                    {for dash.categories.iter().map(|view| render_category(view, &callbacks.on_vote))}
                </div>
                {render_overlay(dash.unlocked, windows)}
            </div>
            {render_aggregate(&dash.aggregate)}
            <div class="mt-6 flex justify-center">
                <button type="button" class={button_danger()} onclick={callbacks.on_reset.clone()}>
                    {"Reiniciar votos"}
                </button>
            </div>
        </div>
    }
}
