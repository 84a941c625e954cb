use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use crate::error::{Error, Result};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Minutes since midnight, always below [`MINUTES_PER_DAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        if hours > 23 || minutes > 59 {
            return Err(Error::invalid_input(format!("Time out of range: {}:{}", hours, minutes)));
        }
        Ok(Self(u16::from(hours) * 60 + u16::from(minutes)))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(Error::invalid_input(format!("Minute of day out of range: {}", minutes)));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u16 { self.0 }
}

impl From<OffsetDateTime> for TimeOfDay {
    fn from(now: OffsetDateTime) -> Self {
        Self(u16::from(now.hour()) * 60 + u16::from(now.minute()))
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::invalid_input(format!("Expected HH:MM, got {:?}", s));
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hours = h.parse::<u8>().map_err(|_| malformed())?;
        let minutes = m.parse::<u8>().map_err(|_| malformed())?;
        Self::new(hours, minutes)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String { t.to_string() }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A daily availability window. `start > end` wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ScheduleWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, t: TimeOfDay) -> bool {
        if self.wraps_midnight() {
            t >= self.start || t < self.end
        } else {
            self.start <= t && t < self.end
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    windows: Vec<ScheduleWindow>,
}

impl Schedule {
    pub fn new(windows: Vec<ScheduleWindow>) -> Self {
        Self { windows }
    }

    /// Parses `(start, end)` pairs written as `"HH:MM"`.
    pub fn parse(pairs: &[(&str, &str)]) -> Result<Self> {
        pairs.iter()
            .map(|(start, end)| ScheduleWindow::parse(start, end))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn windows(&self) -> &[ScheduleWindow] { &self.windows }

    pub fn is_available(&self, t: TimeOfDay) -> bool {
        self.windows.iter().any(|w| w.contains(t))
    }

    pub fn is_available_at(&self, now: OffsetDateTime) -> bool {
        self.is_available(TimeOfDay::from(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay { s.parse().unwrap() }

    #[test]
    fn parses_and_prints_times() {
        assert_eq!(t("06:15").minutes(), 375);
        assert_eq!(t("0:05").to_string(), "00:05");
        assert_eq!(t("23:59").minutes(), MINUTES_PER_DAY - 1);
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("12-30".parse::<TimeOfDay>().is_err());
        assert!(TimeOfDay::from_minutes(MINUTES_PER_DAY).is_err());
    }

    #[test]
    fn same_day_window_is_half_open() {
        let w = ScheduleWindow::parse("11:00", "13:30").unwrap();
        assert!(!w.contains(t("10:59")));
        assert!(w.contains(t("11:00")));
        assert!(w.contains(t("13:29")));
        assert!(!w.contains(t("13:30")));
    }

    #[test]
    fn wrapping_window_spans_midnight() {
        let w = ScheduleWindow::parse("23:30", "00:30").unwrap();
        assert!(w.wraps_midnight());
        assert!(w.contains(t("23:45")));
        assert!(w.contains(t("00:15")));
        assert!(!w.contains(t("12:00")));
        assert!(!w.contains(t("00:30")));
        assert!(w.contains(t("23:30")));
    }

    #[test]
    fn schedule_is_a_disjunction() {
        let s = Schedule::parse(&[("06:15", "07:50"), ("07:00", "09:00")]).unwrap();
        assert!(s.is_available(t("06:30")));
        assert!(s.is_available(t("08:00")));
        assert!(!s.is_available(t("09:00")));
        assert!(!Schedule::default().is_available(t("08:00")));
    }

    #[test]
    fn window_serde_uses_clock_strings() {
        let w: ScheduleWindow = serde_json::from_str(r#"{"start":"18:00","end":"20:00"}"#).unwrap();
        assert_eq!(w, ScheduleWindow::parse("18:00", "20:00").unwrap());
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"start":"18:00","end":"20:00"}"#);
        assert!(serde_json::from_str::<ScheduleWindow>(r#"{"start":"25:00","end":"20:00"}"#).is_err());
    }
}
