//! # Schedule Parsing Module
//!
//! Converts the opening-hours mini-language of the restaurant register into
//! whole hours per week. A schedule cell holds one or more clauses separated
//! by commas, each clause being a day span followed by one or more time ranges
//! joined with " ja ":
//!
//! ```text
//! Ma-To 09:00-16:00, Pe 09:00-16:30
//! Ma-Pe 10:00-12:00 ja 12:30-14:30
//! ```
use crate::error::HoursError;
use crate::helpers::string::{split_raw, trim_start};
use thiserror::Error;
use tracing::debug;

pub mod time_range;
pub mod weekday;

pub use time_range::TimeRange;
pub use weekday::{DaySpan, Weekday};

/// Joins several time ranges of the same day span.
pub const JA: &str = " ja ";

/// Errors raised for schedule strings that do not follow the grammar.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// No space between the day span and the time ranges
    #[error("Missing space between days and hours in '{0}'")]
    MissingSeparator(String),

    /// Day code outside Ma, Ti, Ke, To, Pe, La, Su
    #[error("Unknown day code '{0}'")]
    UnknownDay(String),

    /// Day range whose last day precedes its first day
    #[error("Day span '{0}' ends before it starts")]
    ReversedDaySpan(String),

    /// Time range not in HH:MM-HH:MM form
    #[error("Invalid time range format '{0}'")]
    MalformedTimeRange(String),

    /// Time range closing before it opens
    #[error("Time range '{0}' ends before it starts")]
    NegativeTimeRange(String),
}

/// One day span with its time ranges, e.g. "Ma-Pe 10:00-12:00 ja 12:30-14:30".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleClause {
    pub days: DaySpan,
    pub times: Vec<TimeRange>,
}

impl ScheduleClause {
    /// Total hours of the clause: the summed time ranges times the number of days.
    pub fn hours(&self) -> u32 {
        let daily: u32 = self.times.iter().map(TimeRange::whole_hours).sum();
        daily * self.days.day_count()
    }
}

impl TryFrom<&str> for ScheduleClause {
    type Error = HoursError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let full_time = trim_start(value);
        let (days_str, rest) = full_time
            .split_once(' ')
            .ok_or(ScheduleError::MissingSeparator(full_time.to_owned()))?;
        let times = rest
            .split(JA)
            .map(TimeRange::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ScheduleClause {
            days: DaySpan::try_from(days_str)?,
            times,
        })
    }
}

/// Converts a single clause such as "Ma-Pe 10:00-16:00" into its hour count.
///
/// Leading whitespace is ignored. Any number of time ranges may be joined with " ja ".
///
/// # Errors
///
/// Returns a [`ScheduleError`] wrapped in [`HoursError`] for an unknown day code,
/// a missing separator or a malformed clock value.
pub fn count_hours_single_timespan(text: &str) -> Result<u32, HoursError> {
    let clause = ScheduleClause::try_from(text)?;
    let hours = clause.hours();
    debug!(clause = text.trim(), hours, "counted clause");
    Ok(hours)
}

/// Converts a whole schedule cell into weekly hours by summing its clauses.
/// Blank clauses, such as the one after a trailing separator, count as zero.
pub fn parse_schedule_cell(cell: &str, separator: char) -> Result<u32, HoursError> {
    split_raw(cell, separator)
        .filter(|clause| !clause.trim().is_empty())
        .map(count_hours_single_timespan)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_hours_single_timespan() {
        assert_eq!(count_hours_single_timespan("Ma-Pe 10:00-16:00").unwrap(), 5 * 6);
        assert_eq!(count_hours_single_timespan("To 09:00-16:30").unwrap(), 7);
        assert_eq!(count_hours_single_timespan("Pe 09:30-16:00").unwrap(), 6);
        assert_eq!(count_hours_single_timespan("Ke-Pe 10:00-16:00").unwrap(), 3 * 6);
        assert_eq!(
            count_hours_single_timespan("Ma-Pe 10:00-12:00 ja 12:30-14:30").unwrap(),
            5 * 2 + 5 * 2
        );
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(count_hours_single_timespan("   La 10:00-14:00").unwrap(), 4);
        assert_eq!(count_hours_single_timespan(" Ma-Pe 10:00-16:30").unwrap(), 30);
    }

    #[test]
    fn test_several_ja_ranges() {
        let clause = ScheduleClause::try_from("Ma-Ti 08:00-10:00 ja 11:00-13:00 ja 14:00-15:00").unwrap();
        assert_eq!(clause.times.len(), 3);
        assert_eq!(clause.hours(), 2 * 5);
    }

    #[test]
    fn test_clause_structure() {
        let clause = ScheduleClause::try_from("To 09:00-16:30").unwrap();
        assert_eq!(clause.days, DaySpan::Single(Weekday::Thursday));
        assert_eq!(clause.times.len(), 1);
    }

    #[test]
    fn test_parse_schedule_cell() {
        assert_eq!(parse_schedule_cell("Ma-To 09:00-16:00, Pe 09:00-16:30", ',').unwrap(), 35);
        assert_eq!(parse_schedule_cell("Ma-Pe 10:00-18:00", ',').unwrap(), 40);
        assert_eq!(parse_schedule_cell("Ma-Pe 10:00-16:00, La 10:00-14:00,", ',').unwrap(), 34);
        assert_eq!(parse_schedule_cell("", ',').unwrap(), 0);
    }

    #[test]
    fn test_malformed_clause() {
        assert!(matches!(
            count_hours_single_timespan("Ma-Pe"),
            Err(HoursError::ScheduleError(ScheduleError::MissingSeparator(_)))
        ));
        assert!(matches!(
            count_hours_single_timespan("Xx 10:00-12:00"),
            Err(HoursError::ScheduleError(ScheduleError::UnknownDay(_)))
        ));
        assert!(matches!(
            count_hours_single_timespan("Ma 10:00-12:00 ja"),
            Err(HoursError::ScheduleError(ScheduleError::MalformedTimeRange(_)))
        ));
    }

    #[test]
    fn test_cell_failure_aborts() {
        assert!(parse_schedule_cell("Ma-Pe 10:00-16:00, Xx 10:00-12:00", ',').is_err());
    }
}
