//! # Restaurant Opening Hours
//!
//! Reads a semicolon separated restaurant register, converts each restaurant's
//! opening-hours description into whole hours per week and ranks the restaurants
//! from the most open to the least open.
//!
//! ## Register format
//!
//! One restaurant per line. Field 1 holds the name and field 4 the schedule:
//!
//! ```text
//! 506002;HUMPPILAN RAVINTOLA;31640;HUMPPILA;Ma-To 09:00-16:00, Pe 09:00-16:30;60.92;23.36
//! ```
//!
//! ## Example
//!
//! ```
//! use restaurant_hours::{parse_records, rank_restaurants, Criteria};
//!
//! let text = "1;A;x;y;Ma-Pe 10:00-18:00\n2;B;x;y;Ma-To 09:00-16:00, Pe 09:00-16:30\n";
//! let ranked = rank_restaurants(&parse_records(text, &Criteria::default())).unwrap();
//! assert_eq!(ranked.first().unwrap().hours(), 40);
//! ```
pub mod criteria;
pub mod error;
pub mod presenter;
pub mod ranking;
pub mod schedule;

pub(crate) mod helpers {
    pub(crate) mod reader;
    pub(crate) mod string;
}

pub use criteria::Criteria;
pub use error::HoursError;
pub use helpers::reader::{parse_records, read_records, ReaderError};
pub use presenter::{summarize, PresenterError, Summary};
pub use ranking::{rank_restaurants, rank_restaurants_with, OpeningHours, RankedList, RankingError, Record};
pub use schedule::{count_hours_single_timespan, parse_schedule_cell, ScheduleError};
