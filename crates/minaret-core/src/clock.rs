//! Wall-clock abstraction.
//!
//! The fetcher and the scheduler never read the system clock or sleep
//! directly; they go through [`Clock`] so tests can drive time
//! deterministically.

use std::time::Duration;

use chrono::{Local, NaiveTime};

/// Source of the current time of day and of thread suspension.
pub trait Clock {
    /// Current local time of day.
    fn now(&self) -> NaiveTime;

    /// Suspend the calling thread for `d`.
    fn sleep(&self, d: Duration);
}

/// Host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }

    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}
