//! Stop command.

use std::io::Write;

use anyhow::Result;
use sand_core::{Clock, Storage, Tracker};

use crate::display::{Palette, humanize};

pub fn run<W: Write, S: Storage, C: Clock>(
    writer: &mut W,
    tracker: &Tracker<S, C>,
    palette: Palette,
) -> Result<()> {
    let record = tracker.stop()?;
    writeln!(
        writer,
        "stopped {} after {}",
        palette.activity(&record.activity),
        palette.duration(&humanize(record.duration))
    )?;
    Ok(())
}
