//! # Ranking Module
//!
//! Combines the per-row schedule results into a list of restaurants ordered by
//! weekly opening hours, most open first.
use crate::criteria::Criteria;
use crate::error::{HoursError, ResultMessage};
use crate::schedule::parse_schedule_cell;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info};

/// Errors related to the shape of input records.
#[derive(Error, Debug)]
pub enum RankingError {
    /// Record is shorter than a column the layout needs
    #[error("Row {row} has {len} fields, column {index} is missing")]
    MissingField { row: usize, index: usize, len: usize },
}

/// One input row as an ordered list of text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// Field at a zero-based position.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, row: usize, index: usize) -> Result<&str, RankingError> {
        self.field(index).ok_or(RankingError::MissingField {
            row,
            index,
            len: self.len(),
        })
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Weekly opening hours of one restaurant. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpeningHours {
    restaurant: String,
    hours: u32,
}

impl OpeningHours {
    pub fn new(restaurant: impl Into<String>, hours: u32) -> Self {
        OpeningHours {
            restaurant: restaurant.into(),
            hours,
        }
    }

    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }
}

impl Display for OpeningHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} h)", self.restaurant, self.hours)
    }
}

/// Restaurants sorted by descending hours. Equal hours keep their input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<OpeningHours>,
}

impl RankedList {
    /// Sorts the entries stably, most hours first.
    pub fn new(mut entries: Vec<OpeningHours>) -> Self {
        entries.sort_by(|a, b| b.hours.cmp(&a.hours));
        RankedList { entries }
    }

    pub fn first(&self) -> Option<&OpeningHours> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&OpeningHours> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> Option<&OpeningHours> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &OpeningHours> + '_ {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<OpeningHours> {
        self.entries
    }
}

/// Computes the weekly hours of one record.
fn opening_hours(row: usize, record: &Record, criteria: &Criteria) -> Result<OpeningHours, HoursError> {
    let name = record.require(row, criteria.name_column)?;
    let schedule = record.require(row, criteria.schedule_column)?;
    let hours = parse_schedule_cell(schedule, criteria.clause_separator)
        .with_prefix(&format!("Row {} ('{}')", row, name))?;
    debug!(row, restaurant = name, hours, "computed weekly hours");
    Ok(OpeningHours::new(name, hours))
}

/// Ranks restaurants by weekly opening hours using the layout in `criteria`.
///
/// Produces exactly one entry per record, duplicate names included. Row numbers
/// in errors are one-based.
///
/// # Errors
///
/// Fails on the first record that lacks a needed column or holds a malformed
/// schedule; no partial result is returned.
pub fn rank_restaurants_with(records: &[Record], criteria: &Criteria) -> Result<RankedList, HoursError> {
    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| opening_hours(index + 1, record, criteria))
        .collect::<Result<Vec<_>, _>>()?;
    info!(restaurants = entries.len(), "ranked restaurants");
    Ok(RankedList::new(entries))
}

/// Ranks restaurants with the default layout: name in field 1, schedule in field 4.
pub fn rank_restaurants(records: &[Record]) -> Result<RankedList, HoursError> {
    rank_restaurants_with(records, &Criteria::default())
}
