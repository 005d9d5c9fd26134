//! Log entries and the line codec.
//!
//! Each line of the tracking file is one entry:
//!
//! ```text
//! 2020-05-04 13:55:12 START drawing
//! 2020-05-04 15:55:12 STOP
//! ```
//!
//! Lines are ordered by append time; the codec never re-sorts them.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use crate::SandError;

/// Date portion of an encoded timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full encoded timestamp: sortable, locale-independent, second precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Start,
    Stop,
}

impl EntryKind {
    /// Token used in the log file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Stop => "STOP",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = UnknownEntryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START" => Ok(Self::Start),
            "STOP" => Ok(Self::Stop),
            _ => Err(UnknownEntryKind(s.to_string())),
        }
    }
}

/// Error type for unknown entry kind tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry kind: {0}")]
pub struct UnknownEntryKind(String);

/// Reasons a single line fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Fewer than three whitespace-separated tokens.
    #[error("expected `<date> <time> <kind>`")]
    MissingFields,

    /// Date and time tokens do not form a valid timestamp.
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),

    #[error(transparent)]
    UnknownKind(#[from] UnknownEntryKind),

    /// A START entry without activity text.
    #[error("START entry has no activity")]
    MissingActivity,
}

/// A decoded log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The literal date token, kept for substring matching in queries.
    pub raw_date: String,
    /// When the entry was recorded (local wall time).
    pub time: NaiveDateTime,
    pub kind: EntryKind,
    /// Activity text; always empty for STOP entries.
    pub activity: String,
}

impl Entry {
    /// Builds an entry for a clock reading, truncated to whole seconds.
    pub fn new(kind: EntryKind, activity: &str, time: NaiveDateTime) -> Self {
        let time = time.with_nanosecond(0).unwrap_or(time);
        let activity = match kind {
            EntryKind::Start => activity.to_string(),
            EntryKind::Stop => String::new(),
        };
        Self {
            raw_date: time.format(DATE_FORMAT).to_string(),
            time,
            kind,
            activity,
        }
    }

    /// A START entry for `activity` at `time`.
    pub fn start(activity: &str, time: NaiveDateTime) -> Self {
        Self::new(EntryKind::Start, activity, time)
    }

    /// A STOP entry at `time`.
    pub fn stop(time: NaiveDateTime) -> Self {
        Self::new(EntryKind::Stop, "", time)
    }

    /// Decodes one line.
    ///
    /// The activity is everything after the kind token, re-joined with single
    /// spaces. Text after a STOP token is ignored.
    pub fn parse(line: &str) -> Result<Self, LineError> {
        let mut tokens = line.split_whitespace();
        let (Some(date), Some(time), Some(kind)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(LineError::MissingFields);
        };

        let timestamp = format!("{date} {time}");
        let parsed = NaiveDateTime::parse_from_str(&timestamp, TIME_FORMAT)
            .map_err(|_| LineError::InvalidTimestamp(timestamp.clone()))?;
        let kind: EntryKind = kind.parse()?;

        let activity = match kind {
            EntryKind::Start => {
                let activity = tokens.collect::<Vec<_>>().join(" ");
                if activity.is_empty() {
                    return Err(LineError::MissingActivity);
                }
                activity
            }
            EntryKind::Stop => String::new(),
        };

        Ok(Self {
            raw_date: date.to_string(),
            time: parsed,
            kind,
            activity,
        })
    }

    /// Encodes the entry as a log line, without the trailing newline.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub const fn is_start(&self) -> bool {
        matches!(self.kind, EntryKind::Start)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time.format(TIME_FORMAT), self.kind)?;
        if self.is_start() {
            write!(f, " {}", self.activity)?;
        }
        Ok(())
    }
}

impl FromStr for Entry {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Collapses every whitespace run in `activity` to a single space.
///
/// Newlines and tabs cannot survive in a line-delimited log, and `parse`
/// re-joins tokens with single spaces, so this is the form that reads back.
pub fn normalize_activity(activity: &str) -> String {
    activity.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes a whole tracking file.
///
/// Blank lines carry no entry and are skipped. The first undecodable line
/// fails the whole read, since dropping it would shift interval pairing.
pub fn parse_log(contents: &str) -> Result<Vec<Entry>, SandError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Entry::parse(line).map_err(|source| SandError::MalformedLine {
                line_number: index + 1,
                line: line.to_string(),
                source,
            })
        })
        .collect()
}
