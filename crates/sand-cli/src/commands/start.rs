//! Start command.

use std::io::Write;

use anyhow::Result;
use sand_core::{Clock, Storage, Tracker, normalize_activity};

use crate::display::{Palette, humanize};

/// Starts the activity described by `words`, joined with single spaces.
pub fn run<W: Write, S: Storage, C: Clock>(
    writer: &mut W,
    tracker: &Tracker<S, C>,
    words: &[String],
    palette: Palette,
) -> Result<()> {
    let activity = normalize_activity(&words.join(" "));
    let stopped = tracker.start(&activity)?;

    if let Some(record) = stopped {
        writeln!(
            writer,
            "stopped {} after {}",
            palette.activity(&record.activity),
            palette.duration(&humanize(record.duration))
        )?;
    }
    writeln!(writer, "started {}", palette.activity(&activity))?;
    Ok(())
}
