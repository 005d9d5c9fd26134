//! Query commands: `today`, `yesterday` and free-text `query`.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDateTime, TimeDelta};
use sand_core::{Clock, Storage, Tracker};

use crate::display::{Palette, render_records, render_sums};

/// A calendar day relative to the tracker's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Yesterday,
}

impl Day {
    /// The `YYYY-MM-DD` filter text for this day.
    pub fn filter(self, now: NaiveDateTime) -> String {
        let date = match self {
            Self::Today => now.date(),
            Self::Yesterday => now.date() - TimeDelta::days(1),
        };
        date.format("%Y-%m-%d").to_string()
    }
}

/// Prints every interval whose activity or date contains `filter`.
pub fn run<W: Write, S: Storage, C: Clock>(
    writer: &mut W,
    tracker: &Tracker<S, C>,
    filter: &str,
    sum: bool,
    palette: Palette,
) -> Result<()> {
    let records = tracker.query(filter)?;
    if records.is_empty() {
        writeln!(writer, "nothing recorded")?;
        return Ok(());
    }

    let table = if sum {
        render_sums(&records, palette)
    } else {
        render_records(&records, palette)
    };
    writeln!(writer, "{table}")?;
    Ok(())
}

/// Prints the intervals started on `day`.
pub fn run_day<W: Write, S: Storage, C: Clock>(
    writer: &mut W,
    tracker: &Tracker<S, C>,
    day: Day,
    sum: bool,
    palette: Palette,
) -> Result<()> {
    let filter = day.filter(tracker.clock().now());
    tracing::debug!(%filter, ?day, "querying day");
    run(writer, tracker, &filter, sum, palette)
}
