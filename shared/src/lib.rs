pub mod auth;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;
pub mod schedule;
pub mod tally;

pub use auth::{Authorization, SecretKey};
pub use config::SurveyConfig;
pub use controller::{InactivityTimer, LockStatus, Notice, SurveyController};
pub use error::{Error, ErrorCode, Result};
pub use logger::VoteSink;
pub use models::*;
pub use schedule::{Schedule, ScheduleWindow, TimeOfDay};
pub use tally::VoteTally;

#[cfg(test)]
mod tests;
