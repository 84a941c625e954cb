use gloo_timers::callback::Timeout;
use tracing::warn;

/// Blocking text prompt. `None` when dismissed or when no window exists.
pub fn prompt(message: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message(message) {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Prompt failed: {:?}", e);
            None
        }
    }
}

/// Shows `message` after the current render has been flushed.
pub fn alert_later(message: String) {
    Timeout::new(0, move || {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(&message) {
                warn!("Alert failed: {:?}", e);
            }
        }
    }).forget();
}
