use crate::error::HoursError;
use crate::schedule::ScheduleError;
use chrono::Duration;
use regex::Regex;
use std::sync::OnceLock;

/// A start and end clock time within one day, e.g. "10:00-16:30".
/// Both ends are stored as minutes since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub(crate) start_minutes: u32,
    pub(crate) end_minutes: u32,
}

impl TimeRange {
    /// Length of the range in whole hours, partial hours are truncated.
    pub fn whole_hours(&self) -> u32 {
        let length = Duration::minutes(i64::from(self.end_minutes - self.start_minutes));
        length.num_hours() as u32
    }
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):(\d{1,2})\s*-\s*(\d{1,2}):(\d{1,2})$").expect("Hardcode regex pattern")
    })
}

impl TryFrom<&str> for TimeRange {
    type Error = HoursError;

    /// Parses "HH:MM-HH:MM". The end must not be earlier than the start.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let captures = pattern()
            .captures(value)
            .ok_or(ScheduleError::MalformedTimeRange(value.to_owned()))?;
        let minutes = |hour: usize, minute: usize| -> Result<u32, HoursError> {
            Ok(captures[hour].parse::<u32>()? * 60 + captures[minute].parse::<u32>()?)
        };
        let start_minutes = minutes(1, 2)?;
        let end_minutes = minutes(3, 4)?;
        if end_minutes < start_minutes {
            Err(ScheduleError::NegativeTimeRange(value.to_owned()))?;
        }
        Ok(TimeRange {
            start_minutes,
            end_minutes,
        })
    }
}
