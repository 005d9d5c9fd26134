//! Human-readable rendering of status records.

use std::io::IsTerminal;

use chrono::{NaiveDateTime, TimeDelta};
use owo_colors::{OwoColorize, Style};
use sand_core::StatusRecord;

// ========== Colour ==========

/// Decides whether output is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// No escape codes.
    pub const PLAIN: Self = Self { enabled: false };

    /// Colour only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn paint(self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn time(self, text: &str) -> String {
        self.paint(text, Style::new().bright_black())
    }

    pub fn kind(self, text: &str) -> String {
        self.paint(text, Style::new().magenta())
    }

    pub fn activity(self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }

    pub fn duration(self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }
}

// ========== Formatting ==========

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_time(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn plural(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Formats a duration as its non-zero day, hour and minute components.
///
/// `TimeDelta::minutes(65)` becomes "1 hour, 5 minutes". Durations under a
/// minute become "less than a minute".
pub fn humanize(duration: TimeDelta) -> String {
    let components = [
        (duration.num_days(), "day"),
        (duration.num_hours() % 24, "hour"),
        (duration.num_minutes() % 60, "minute"),
    ];

    let parts: Vec<_> = components
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| plural(*value, unit))
        .collect();

    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(", ")
    }
}

/// Splits an activity into its type (first word) and description.
pub fn split_activity(activity: &str) -> (&str, &str) {
    activity.split_once(' ').unwrap_or((activity, ""))
}

// ========== Tables ==========

/// Total duration per activity, in order of first appearance.
pub fn sum_by_activity(records: &[StatusRecord]) -> Vec<(String, TimeDelta)> {
    let mut sums: Vec<(String, TimeDelta)> = Vec::new();
    for record in records {
        match sums.iter_mut().find(|(activity, _)| *activity == record.activity) {
            Some((_, total)) => *total = *total + record.duration,
            None => sums.push((record.activity.clone(), record.duration)),
        }
    }
    sums
}

/// One row per record: time, type, description, duration.
pub fn render_records(records: &[StatusRecord], palette: Palette) -> String {
    records
        .iter()
        .map(|record| {
            let (kind, description) = split_activity(&record.activity);
            [
                palette.time(&format_time(record.time)),
                palette.kind(kind),
                palette.activity(description),
                palette.duration(&humanize(record.duration)),
            ]
            .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row per distinct activity: type, description, total duration.
pub fn render_sums(records: &[StatusRecord], palette: Palette) -> String {
    sum_by_activity(records)
        .iter()
        .map(|(activity, total)| {
            let (kind, description) = split_activity(activity);
            [
                palette.kind(kind),
                palette.activity(description),
                palette.duration(&humanize(*total)),
            ]
            .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
