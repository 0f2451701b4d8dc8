use crate::error::HoursError;
use crate::schedule::ScheduleError;

/// Days of the week, numbered from Monday (1) to Sunday (7).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Maanantai
    Monday = 1,
    /// Tiistai
    Tuesday = 2,
    /// Keskiviikko
    Wednesday = 3,
    /// Torstai
    Thursday = 4,
    /// Perjantai
    Friday = 5,
    /// Lauantai
    Saturday = 6,
    /// Sunnuntai
    Sunday = 7,
}

/// Two-letter Finnish day codes used by the restaurant register.
const DAY_CODES: [(&str, Weekday); 7] = [
    ("Ma", Weekday::Monday),
    ("Ti", Weekday::Tuesday),
    ("Ke", Weekday::Wednesday),
    ("To", Weekday::Thursday),
    ("Pe", Weekday::Friday),
    ("La", Weekday::Saturday),
    ("Su", Weekday::Sunday),
];

impl Weekday {
    /// Looks up a day by its two-letter code. Codes are case sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        DAY_CODES
            .iter()
            .find(|(name, _)| *name == code)
            .map(|(_, day)| *day)
    }

    /// The two-letter code of this day.
    pub fn code(self) -> &'static str {
        DAY_CODES[self.ordinal() as usize - 1].0
    }

    /// Position of the day in the week, Monday is 1.
    #[inline]
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

impl TryFrom<&str> for Weekday {
    type Error = HoursError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value.trim();
        Weekday::from_code(code).ok_or_else(|| ScheduleError::UnknownDay(code.to_owned()).into())
    }
}

/// A single day or an inclusive range of days, e.g. "To" or "Ma-Pe".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DaySpan {
    Single(Weekday),
    Range { start: Weekday, end: Weekday },
}

impl DaySpan {
    /// Number of days covered by the span.
    pub fn day_count(&self) -> u32 {
        match self {
            DaySpan::Single(_) => 1,
            DaySpan::Range { start, end } => end.ordinal() - start.ordinal() + 1,
        }
    }
}

impl TryFrom<&str> for DaySpan {
    type Error = HoursError;

    /// Parses "Ma" or "Ma-Pe". A range must not end before it starts.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.split_once('-') {
            None => Ok(DaySpan::Single(Weekday::try_from(value)?)),
            Some((start, end)) => {
                let start = Weekday::try_from(start)?;
                let end = Weekday::try_from(end)?;
                if end < start {
                    Err(ScheduleError::ReversedDaySpan(value.to_owned()))?;
                }
                Ok(DaySpan::Range { start, end })
            }
        }
    }
}
