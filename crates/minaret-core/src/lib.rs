//! # Minaret Core Library
//!
//! Core logic for minaret, a daemon that sends desktop notifications at the
//! adhān and iqāma times of the five daily Islamic prayers.
//!
//! ## Architecture
//!
//! - **Fetcher**: Resolves today's time table from the Aladhan API once at
//!   startup, with a fixed-delay retry budget; exhausting the budget is the
//!   only fatal error in the program
//! - **Scheduler**: A single-threaded polling loop that compares the wall
//!   clock against the table at minute resolution and fires notifications
//! - **Notification sink**: Fire-and-forget desktop notifications; delivery
//!   failures never propagate into the loop
//!
//! ## Key Components
//!
//! - [`TimingsClient`]: HTTP client for the time table source
//! - [`Scheduler`]: The event-matching polling loop
//! - [`TimeTable`]: The day's resolved prayer times
//! - [`Notify`]: Trait seam for the notification sink

pub mod clock;
pub mod config;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod scheduler;
pub mod timetable;

pub use clock::{Clock, SystemClock};
pub use config::{Location, RetryPolicy, ScheduleConfig};
pub use error::{ConfigError, FetchError};
pub use fetch::TimingsClient;
pub use notify::{DesktopNotifier, Notify};
pub use scheduler::Scheduler;
pub use timetable::{Prayer, TimeTable};
