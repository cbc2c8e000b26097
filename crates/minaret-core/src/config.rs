//! Runtime configuration threaded into the fetcher and scheduler.
//!
//! Everything here is constructed once at startup and read-only afterwards.

use std::time::Duration;

use crate::error::ConfigError;

/// Where to resolve prayer times for.
#[derive(Debug, Clone)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    /// Validate and normalize a location. Spaces in the country name are
    /// replaced with `+` so the value can be spliced into the query string.
    pub fn new(city: &str, country: &str) -> Result<Self, ConfigError> {
        if city.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "city".into(),
                message: "must not be empty".into(),
            });
        }
        if country.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "country".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(Self {
            city: city.trim().to_string(),
            country: country.trim().replace(' ', "+"),
        })
    }
}

/// Fixed-delay retry policy for the fetcher.
///
/// The delay is constant between attempts; there is no backoff curve.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Scheduler behavior.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    /// Whether the follow-up iqāma notification is sent at all.
    pub iqama_enabled: bool,
    /// Minutes between a prayer's time and its iqāma notification.
    pub iqama_offset_min: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            iqama_enabled: true,
            iqama_offset_min: 14,
        }
    }
}
