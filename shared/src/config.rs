use time::Duration;
use crate::auth::SecretKey;
use crate::error::{Error, Result};
use crate::schedule::Schedule;

pub const DEFAULT_SECRET_KEY: &str = "GG2024";
pub const DEFAULT_INACTIVITY_MS: i64 = 10_000;
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Cafeteria service hours: breakfast, lunch, dinner, late night.
pub const DEFAULT_WINDOWS: [(&str, &str); 4] = [
    ("06:15", "07:50"),
    ("11:00", "13:30"),
    ("18:00", "20:00"),
    ("00:05", "01:30"),
];

#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub secret_key: SecretKey,
    pub inactivity: Duration,
    pub schedule: Schedule,
    pub vote_log_url: Option<String>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            secret_key: SecretKey::new(DEFAULT_SECRET_KEY),
            inactivity: Duration::milliseconds(DEFAULT_INACTIVITY_MS),
            schedule: Schedule::parse(&DEFAULT_WINDOWS).unwrap_or_default(),
            vote_log_url: None,
        }
    }
}

impl SurveyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            return Err(Error::misconfigured("Secret key must not be empty"));
        }
        if !self.inactivity.is_positive() {
            return Err(Error::misconfigured(format!("Inactivity timeout must be positive, got {}", self.inactivity)));
        }
        Ok(())
    }
}
