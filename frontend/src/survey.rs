use yew::prelude::*;
use gloo_timers::callback::Interval;
use shared::controller::{RESET_PROMPT, UNLOCK_PROMPT};
use shared::{Category, Color, Notice, SurveyConfig, SurveyController};
use time::OffsetDateTime;
use tracing::{error, info};
use crate::activity::ActivityListener;
use crate::config::CONFIG;
use crate::dialogs::{alert_later, prompt};
use crate::render::{render_panel, PanelCallbacks};
use crate::timer::TimeoutTimer;
use crate::vote_logger::HttpVoteLogger;

pub enum Msg {
    Tick,
    Activity,
    Vote(Category, Color),
    InactivityElapsed,
    Unlock,
    Reset,
}

pub struct Survey {
    controller: SurveyController<TimeoutTimer, HttpVoteLogger>,
    callbacks: PanelCallbacks,
    now: OffsetDateTime,
    _tick: Interval,
    _activity: Option<ActivityListener>,
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

impl Component for Survey {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = CONFIG.survey().unwrap_or_else(|e| {
            error!("Invalid survey configuration, falling back to defaults: {}", e);
            SurveyConfig::default()
        });
        info!(windows = config.schedule.windows().len(), "Survey panel starting");

        let timer = TimeoutTimer::new(ctx.link().callback(|_| Msg::InactivityElapsed));
        let logger = HttpVoteLogger::new(config.vote_log_url.clone());

        let tick = {
            let link = ctx.link().clone();
            Interval::new(CONFIG.tick_ms, move || link.send_message(Msg::Tick))
        };

        let activity = ActivityListener::attach(ctx.link().callback(|_| Msg::Activity));
        if activity.is_none() {
            error!("No document available; inactivity tracking disabled");
        }

        Self {
            controller: SurveyController::new(config, timer, logger),
            callbacks: PanelCallbacks {
                on_vote: ctx.link().callback(|(category, color): (Category, Color)| Msg::Vote(category, color)),
                on_unlock: ctx.link().callback(|_| Msg::Unlock),
                on_reset: ctx.link().callback(|_| Msg::Reset),
            },
            now: local_now(),
            _tick: tick,
            _activity: activity,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.now = local_now();
        let inactivity = self.controller.config().inactivity;

        match msg {
            Msg::Tick => {
                self.controller.tick(self.now);
                true
            }
            Msg::Activity => {
                self.controller.record_activity(self.now);
                false
            }
            Msg::Vote(category, color) => self.controller.cast_vote(category, color, self.now),
            Msg::InactivityElapsed => {
                let locked = self.controller.inactivity_elapsed(self.now);
                if locked {
                    alert_later(Notice::AutoLocked.message(inactivity));
                }
                locked
            }
            Msg::Unlock => {
                let entry = prompt(UNLOCK_PROMPT);
                let auth = self.controller.unlock(entry.as_deref(), self.now);
                if let Some(notice) = Notice::for_unlock(auth) {
                    alert_later(notice.message(inactivity));
                }
                true
            }
            Msg::Reset => {
                let entry = prompt(RESET_PROMPT);
                let auth = self.controller.reset(entry.as_deref());
                if let Some(notice) = Notice::for_reset(auth) {
                    alert_later(notice.message(inactivity));
                }
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let dashboard = self.controller.dashboard(self.now);
        render_panel(&dashboard, self.controller.config().schedule.windows(), &self.callbacks)
    }
}
