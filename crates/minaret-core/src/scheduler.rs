//! The event-matching polling loop.
//!
//! Compares the wall clock against the day's table at minute resolution and
//! fires the adhān notification on an exact match, followed by the iqāma
//! reminder after the configured offset. Three waits shape the loop: a 30 s
//! idle tick between sweeps, a 60 s cooldown after each adhān, and 15 s
//! ticks while waiting out the iqāma offset. The cooldown is what keeps a
//! matched minute from firing twice -- there is no other dedup state.
//!
//! Known limitations, kept on purpose:
//! - Matching is equality-only. A minute that was never observed (clock
//!   jump, delayed poll, process downtime) is silently skipped, never fired
//!   late.
//! - The iqāma wait blocks the whole sweep, so another prayer falling
//!   inside that window is missed.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};

use crate::clock::Clock;
use crate::config::ScheduleConfig;
use crate::notify::{self, Notify};
use crate::timetable::{Prayer, TimeTable};

/// Sleep between full sweeps of the table when nothing matched.
pub const IDLE_TICK: Duration = Duration::from_secs(30);
/// Unconditional sleep after firing an adhān; sole per-minute dedup.
pub const FIRE_COOLDOWN: Duration = Duration::from_secs(60);
/// Poll granularity while waiting for the iqāma time.
pub const IQAMA_TICK: Duration = Duration::from_secs(15);

/// Owns the day's table and drives the polling loop until the process dies.
pub struct Scheduler<C, N> {
    table: TimeTable,
    config: ScheduleConfig,
    clock: C,
    notifier: N,
}

impl<C: Clock, N: Notify> Scheduler<C, N> {
    pub fn new(table: TimeTable, config: ScheduleConfig, clock: C, notifier: N) -> Self {
        Self {
            table,
            config,
            clock,
            notifier,
        }
    }

    /// Run the polling loop forever. Only process exit ends it.
    pub fn run(&self) -> ! {
        loop {
            self.sweep();
            self.clock.sleep(IDLE_TICK);
        }
    }

    /// One pass over every table entry. `None` times are skipped without
    /// stopping the sweep over the remaining entries.
    pub fn sweep(&self) {
        for (prayer, time) in self.table.iter() {
            let Some(at) = time else { continue };
            if self.current_minute() == at {
                self.fire(prayer, at);
            }
        }
    }

    fn fire(&self, prayer: Prayer, at: NaiveTime) {
        self.notifier
            .send(&notify::prayer_title(prayer), &notify::adhan_body(prayer, at));
        self.clock.sleep(FIRE_COOLDOWN);

        if self.config.iqama_enabled {
            let iqama_at = at + chrono::Duration::minutes(self.config.iqama_offset_min);
            while self.clock.now() < iqama_at {
                self.clock.sleep(IQAMA_TICK);
            }
            self.notifier
                .send(&notify::prayer_title(prayer), &notify::iqama_body(prayer));
        }
    }

    /// Current time truncated to the minute; matching ignores seconds.
    fn current_minute(&self) -> NaiveTime {
        let now = self.clock.now();
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }
}
