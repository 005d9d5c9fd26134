//! Wall-clock access, injectable for tests.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime, Timelike};

/// Provides the current local time to tracker operations.
pub trait Clock {
    /// Current local wall time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host clock in the local timezone, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock that reports a settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Cell<NaiveDateTime>);

impl FixedClock {
    pub const fn new(time: NaiveDateTime) -> Self {
        Self(Cell::new(time))
    }

    /// Moves the clock to `time`.
    pub fn set(&self, time: NaiveDateTime) {
        self.0.set(time);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
