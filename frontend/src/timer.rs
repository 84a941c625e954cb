use gloo_timers::callback::Timeout;
use shared::InactivityTimer;
use time::Duration;
use yew::Callback;

/// Browser-backed inactivity timer. Dropping a `Timeout` clears it, so
/// replacing or taking the handle is all the cancellation needed.
pub struct TimeoutTimer {
    on_fire: Callback<()>,
    pending: Option<Timeout>,
}

impl TimeoutTimer {
    pub fn new(on_fire: Callback<()>) -> Self {
        Self { on_fire, pending: None }
    }
}

impl InactivityTimer for TimeoutTimer {
    fn arm(&mut self, after: Duration) {
        let millis = u32::try_from(after.whole_milliseconds().max(0)).unwrap_or(u32::MAX);
        let on_fire = self.on_fire.clone();
        self.pending = Some(Timeout::new(millis, move || on_fire.emit(())));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
