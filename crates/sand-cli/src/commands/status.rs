//! Status command for showing the running activity.

use std::io::Write;

use anyhow::Result;
use sand_core::{Clock, Storage, Tracker};

use crate::display::{Palette, render_records};

pub fn run<W: Write, S: Storage, C: Clock>(
    writer: &mut W,
    tracker: &Tracker<S, C>,
    palette: Palette,
) -> Result<()> {
    match tracker.status()? {
        Some(record) => writeln!(writer, "{}", render_records(&[record], palette))?,
        None => writeln!(writer, "currently doing nothing")?,
    }
    Ok(())
}
