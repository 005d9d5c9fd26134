//! Start/stop mutations and queries over the tracking file.

use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::entry::{Entry, normalize_activity, parse_log};
use crate::status::{self, Filter, RunningState, StatusRecord};
use crate::storage::Storage;
use crate::{Result, SandError};

/// Activity engine bound to one tracking file.
///
/// Holds no derived state between calls: every operation reads and decodes
/// the whole log. A single process is assumed to own the log.
#[derive(Debug)]
pub struct Tracker<S, C> {
    storage: S,
    log_path: PathBuf,
    clock: C,
}

impl<S: Storage, C: Clock> Tracker<S, C> {
    pub fn new(storage: S, log_path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            storage,
            log_path: log_path.into(),
            clock,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Decodes the full log.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        let contents = self.storage.read_all(&self.log_path)?;
        parse_log(&contents)
    }

    /// Starts `activity`, stopping the running one first.
    ///
    /// When something is running, the STOP and START lines share one clock
    /// reading and are handed to storage in a single append. If that append
    /// fails part-way the log needs manual inspection.
    ///
    /// Whitespace runs in `activity` (including newlines) are collapsed to
    /// single spaces before encoding; see [`normalize_activity`].
    ///
    /// Returns the interval of the activity that was implicitly stopped.
    pub fn start(&self, activity: &str) -> Result<Option<StatusRecord>> {
        let activity = normalize_activity(activity);
        if activity.is_empty() {
            return Err(SandError::InvalidActivity);
        }

        let entries = self.entries()?;
        let now = self.clock.now();
        let start = Entry::start(&activity, now);

        let stopped = match status::running_state(&entries) {
            RunningState::Running(running) => {
                let stop = Entry::stop(now);
                self.append(&[stop, start])?;
                Some(StatusRecord::between(running, now))
            }
            RunningState::Idle => {
                self.append(&[start])?;
                None
            }
        };

        if let Some(record) = &stopped {
            tracing::info!(stopped = %record.activity, started = %activity, "switched activity");
        } else {
            tracing::info!(%activity, "started activity");
        }
        Ok(stopped)
    }

    /// Stops the running activity and returns its closed interval.
    pub fn stop(&self) -> Result<StatusRecord> {
        let entries = self.entries()?;
        let RunningState::Running(running) = status::running_state(&entries) else {
            return Err(SandError::NothingRunning);
        };

        let now = self.clock.now();
        self.append(&[Entry::stop(now)])?;

        let record = StatusRecord::between(running, now);
        tracing::info!(activity = %record.activity, "stopped activity");
        Ok(record)
    }

    /// The running activity measured up to now, if any.
    pub fn status(&self) -> Result<Option<StatusRecord>> {
        let entries = self.entries()?;
        Ok(status::current_status(&entries, self.clock.now()))
    }

    /// Intervals whose activity or date contains `filter`, oldest first.
    pub fn query<'f>(&self, filter: impl Into<Filter<'f>>) -> Result<Vec<StatusRecord>> {
        let filter = filter.into();
        let entries = self.entries()?;
        let records = status::query(&entries, &filter, self.clock.now());
        tracing::debug!(
            entries = entries.len(),
            matched = records.len(),
            "query complete"
        );
        Ok(records)
    }

    fn append(&self, entries: &[Entry]) -> Result<()> {
        let text: String = entries
            .iter()
            .map(|entry| format!("{}\n", entry.encode()))
            .collect();
        tracing::debug!(path = %self.log_path.display(), lines = entries.len(), "appending");
        self.storage.append(&self.log_path, &text)?;
        Ok(())
    }
}
