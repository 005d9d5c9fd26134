//! Core domain logic for the sand time tracker.
//!
//! This crate contains:
//! - Entry codec: the `YYYY-MM-DD HH:MM:SS KIND [activity]` line format
//! - Status derivation: running state and historical interval queries
//! - Tracker: start/stop mutations over an append-only log
//! - Pointer handling: the one-line file naming the active log

mod clock;
pub mod entry;
mod error;
mod pointer;
pub mod status;
mod storage;
mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{Entry, EntryKind, LineError, UnknownEntryKind, normalize_activity, parse_log};
pub use error::SandError;
pub use pointer::{init, tracking_file_path};
pub use status::{Filter, RunningState, StatusRecord};
pub use storage::{MemoryStorage, Storage};
pub use tracker::Tracker;

/// Result alias for core operations.
pub type Result<T, E = SandError> = std::result::Result<T, E>;
