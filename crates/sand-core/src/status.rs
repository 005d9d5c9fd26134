//! Derived activity state.
//!
//! Nothing here is persisted. Running state and interval records are
//! recomputed from the decoded log on every call.

use chrono::{NaiveDateTime, TimeDelta};

use crate::entry::Entry;

/// One completed or in-progress interval: `[time, time + duration)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    /// When the activity started.
    pub time: NaiveDateTime,
    pub activity: String,
    /// Never negative.
    pub duration: TimeDelta,
}

impl StatusRecord {
    /// Builds the interval from a START entry to `end`.
    ///
    /// An `end` earlier than the start (a hand-edited log) yields a zero
    /// duration.
    pub fn between(start: &Entry, end: NaiveDateTime) -> Self {
        Self {
            time: start.time,
            activity: start.activity.clone(),
            duration: (end - start.time).max(TimeDelta::zero()),
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        self.time + self.duration
    }
}

/// Whether an activity is open, as determined by the last entry alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningState<'a> {
    Idle,
    Running(&'a Entry),
}

impl RunningState<'_> {
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Derives the running state from the chronologically last entry.
///
/// START/STOP counts are not compared: a log ending in two consecutive
/// STARTs is running the second one.
pub fn running_state(entries: &[Entry]) -> RunningState<'_> {
    match entries.last() {
        Some(entry) if entry.is_start() => RunningState::Running(entry),
        _ => RunningState::Idle,
    }
}

/// The running activity measured up to `now`, if any.
pub fn current_status(entries: &[Entry], now: NaiveDateTime) -> Option<StatusRecord> {
    match running_state(entries) {
        RunningState::Running(entry) => Some(StatusRecord::between(entry, now)),
        RunningState::Idle => None,
    }
}

/// Substring filter over START entries.
///
/// An entry matches when its activity text or its raw date token contains
/// the needle. STOP entries never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filter<'a> {
    needle: &'a str,
}

impl<'a> Filter<'a> {
    pub const fn new(needle: &'a str) -> Self {
        Self { needle }
    }

    /// A filter that matches every START entry.
    pub const fn all() -> Self {
        Self::new("")
    }

    pub fn matches_activity(&self, entry: &Entry) -> bool {
        entry.activity.contains(self.needle)
    }

    pub fn matches_date(&self, entry: &Entry) -> bool {
        entry.raw_date.contains(self.needle)
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        entry.is_start() && (self.matches_activity(entry) || self.matches_date(entry))
    }
}

impl<'a> From<&'a str> for Filter<'a> {
    fn from(needle: &'a str) -> Self {
        Self::new(needle)
    }
}

/// Intervals for every START matching `filter`, in log order.
///
/// Each interval ends at the next entry of any kind, or at `now` for the
/// final entry. Non-matching entries are skipped but still terminate the
/// interval before them.
pub fn query(entries: &[Entry], filter: &Filter<'_>, now: NaiveDateTime) -> Vec<StatusRecord> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(index, entry)| {
            let end = entries.get(index + 1).map_or(now, |next| next.time);
            StatusRecord::between(entry, end)
        })
        .collect()
}
