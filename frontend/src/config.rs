use shared::config::{DEFAULT_INACTIVITY_MS, DEFAULT_SECRET_KEY, DEFAULT_WINDOWS, TICK_INTERVAL_MS};
use shared::{Result, Schedule, SecretKey, SurveyConfig};
use time::Duration;

pub struct Config {
    pub secret_key: &'static str,
    pub vote_log_url: Option<&'static str>,
    pub inactivity_ms: i64,
    pub windows: &'static [(&'static str, &'static str)],
    pub tick_ms: u32,
    pub log_filter: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            secret_key: match option_env!("SURVEY_SECRET_KEY") {
                Some(key) => key,
                None => DEFAULT_SECRET_KEY,
            },
            vote_log_url: option_env!("SURVEY_LOG_URL"),
            inactivity_ms: DEFAULT_INACTIVITY_MS,
            windows: &DEFAULT_WINDOWS,
            tick_ms: TICK_INTERVAL_MS,
            log_filter: match option_env!("SURVEY_LOG_FILTER") {
                Some(filter) => filter,
                None => "info",
            },
        }
    }

    pub fn survey(&self) -> Result<SurveyConfig> {
        let config = SurveyConfig {
            secret_key: SecretKey::new(self.secret_key),
            inactivity: Duration::milliseconds(self.inactivity_ms),
            schedule: Schedule::parse(self.windows)?,
            vote_log_url: self.vote_log_url.map(str::to_owned),
        };
        config.validate()?;
        Ok(config)
    }
}

pub const CONFIG: Config = Config::new();
