use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};
use crate::auth::Authorization;
use crate::clock::format_clock;
use crate::config::SurveyConfig;
use crate::logger::VoteSink;
use crate::models::{Category, Color, Dashboard, VoteRecord};
use crate::tally::VoteTally;

pub const UNLOCK_PROMPT: &str = "Introduce la clave para desbloquear el formulario";
pub const RESET_PROMPT: &str = "Por favor, introduce la clave de administrador para reiniciar el formulario:";

/// One-shot deferred callback used for the inactivity lock.
///
/// `arm` replaces any pending firing, so at most one is outstanding. When it
/// fires the owner must call [`SurveyController::inactivity_elapsed`].
pub trait InactivityTimer {
    fn arm(&mut self, after: Duration);
    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Locked,
    UnlockedBySchedule,
    UnlockedManually,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Unlocked,
    UnlockRejected,
    AutoLocked,
    ResetDone,
    ResetRejected,
}

impl Notice {
    pub fn for_unlock(auth: Authorization) -> Option<Self> {
        match auth {
            Authorization::Granted => Some(Notice::Unlocked),
            Authorization::Denied => Some(Notice::UnlockRejected),
            Authorization::Cancelled => None,
        }
    }

    pub fn for_reset(auth: Authorization) -> Option<Self> {
        match auth {
            Authorization::Granted => Some(Notice::ResetDone),
            Authorization::Denied => Some(Notice::ResetRejected),
            Authorization::Cancelled => None,
        }
    }

    pub fn message(self, inactivity: Duration) -> String {
        let secs = inactivity.whole_seconds();
        match self {
            Notice::Unlocked => format!(
                "¡Formulario desbloqueado! Podrás votar hasta la próxima recarga de página o {} segundos de inactividad.",
                secs
            ),
            Notice::UnlockRejected => "Clave incorrecta. El formulario permanece bloqueado.".into(),
            Notice::AutoLocked => format!(
                "El formulario se ha bloqueado automáticamente por {} segundos de inactividad.",
                secs
            ),
            Notice::ResetDone => "El formulario ha sido reiniciado con éxito.".into(),
            Notice::ResetRejected => "Clave incorrecta. El formulario no ha sido reiniciado.".into(),
        }
    }
}

/// Owns the tally and the manual-override flag, and decides whether the
/// panel accepts votes at a given instant.
///
/// Every method takes the current local time explicitly; the controller
/// never reads a clock itself.
pub struct SurveyController<T, S> {
    config: SurveyConfig,
    tally: VoteTally,
    override_active: bool,
    deadline: Option<OffsetDateTime>,
    timer: T,
    sink: S,
}

impl<T: InactivityTimer, S: VoteSink> SurveyController<T, S> {
    pub fn new(config: SurveyConfig, timer: T, sink: S) -> Self {
        Self {
            config,
            tally: VoteTally::new(),
            override_active: false,
            deadline: None,
            timer,
            sink,
        }
    }

    pub fn config(&self) -> &SurveyConfig { &self.config }
    pub fn tally(&self) -> &VoteTally { &self.tally }
    pub fn timer(&self) -> &T { &self.timer }
    pub fn sink(&self) -> &S { &self.sink }
    pub fn override_active(&self) -> bool { self.override_active }

    /// When the pending inactivity timeout is due, if one is armed.
    pub fn pending_deadline(&self) -> Option<OffsetDateTime> { self.deadline }

    pub fn status(&self, now: OffsetDateTime) -> LockStatus {
        if self.override_active {
            LockStatus::UnlockedManually
        } else if self.config.schedule.is_available_at(now) {
            LockStatus::UnlockedBySchedule
        } else {
            LockStatus::Locked
        }
    }

    pub fn is_unlocked(&self, now: OffsetDateTime) -> bool {
        self.config.schedule.is_available_at(now) || self.override_active
    }

    /// `entry` is the prompt result; `None` when the prompt was cancelled.
    pub fn unlock(&mut self, entry: Option<&str>, now: OffsetDateTime) -> Authorization {
        let auth = self.config.secret_key.check(entry);
        if auth == Authorization::Granted {
            self.override_active = true;
            info!("Manual unlock granted");
            self.rearm(now);
        }
        auth
    }

    pub fn reset(&mut self, entry: Option<&str>) -> Authorization {
        let auth = self.config.secret_key.check(entry);
        if auth == Authorization::Granted {
            self.reset_all();
        }
        auth
    }

    pub fn reset_all(&mut self) {
        self.tally.reset();
        info!("All vote counters reset");
    }

    pub fn record_activity(&mut self, now: OffsetDateTime) {
        if self.override_active {
            self.rearm(now);
        }
    }

    /// Returns whether the vote was counted. Votes while locked are dropped
    /// without notice.
    pub fn cast_vote(&mut self, category: Category, color: Color, now: OffsetDateTime) -> bool {
        if !self.is_unlocked(now) {
            debug!(%category, %color, "Vote ignored while locked");
            return false;
        }
        self.record_activity(now);
        self.tally.record(category, color);
        debug!(%category, %color, "Vote counted");
        self.sink.submit(VoteRecord { category, color });
        true
    }

    /// Called when the inactivity timer fires. Returns true if the override
    /// was cleared.
    pub fn inactivity_elapsed(&mut self, now: OffsetDateTime) -> bool {
        let deadline = match self.deadline {
            Some(d) if self.override_active => d,
            _ => return false,
        };
        if now < deadline {
            // Superseded or early firing; wait out the remainder.
            self.timer.arm(deadline - now);
            return false;
        }
        self.deadline = None;
        if self.config.schedule.is_available_at(now) {
            debug!("Inactivity deadline reached inside a schedule window; keeping override");
            return false;
        }
        self.override_active = false;
        info!(inactivity_ms = self.config.inactivity.whole_milliseconds() as i64, "Override cleared after inactivity");
        true
    }

    /// Periodic refresh. Arms the inactivity timer when a manual override
    /// outlives the schedule window it was granted in.
    pub fn tick(&mut self, now: OffsetDateTime) {
        if self.override_active && self.deadline.is_none() && !self.config.schedule.is_available_at(now) {
            self.rearm(now);
        }
    }

    pub fn dashboard(&self, now: OffsetDateTime) -> Dashboard {
        let clock = format_clock(now).unwrap_or_else(|e| {
            warn!("Clock formatting failed: {}", e);
            String::new()
        });
        Dashboard {
            unlocked: self.is_unlocked(now),
            categories: self.tally.views(),
            aggregate: self.tally.aggregate(),
            clock,
        }
    }

    fn rearm(&mut self, now: OffsetDateTime) {
        self.timer.cancel();
        self.deadline = None;
        if self.override_active && !self.config.schedule.is_available_at(now) {
            self.deadline = Some(now + self.config.inactivity);
            self.timer.arm(self.config.inactivity);
        }
    }
}
