//! Restaurant hours command line tool
//!
//! Prints the restaurant that is open the most and the one open the least.
//!
//! # Usage
//!
//! ```bash
//! restaurant-hours ravintolat.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level written to stderr (default: warn)

use anyhow::{bail, Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use restaurant_hours::{rank_restaurants_with, read_records, summarize, Criteria};

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => bail!("Usage: restaurant-hours <register file>"),
    };

    let criteria = Criteria::default();
    let records = read_records(&path, &criteria).context("Failed to read restaurant register")?;
    let ranked = rank_restaurants_with(&records, &criteria)
        .with_context(|| format!("Failed to rank restaurants in '{}'", path))?;
    let summary = summarize(&ranked).with_context(|| format!("Nothing to report for '{}'", path))?;

    print!("{}", summary);
    Ok(())
}
