//! Time table acquisition from the Aladhan API.
//!
//! One fetch happens per process run, guarded by a fixed-delay retry budget.
//! Every kind of attempt failure (transport, status, payload shape) counts
//! the same against the budget; exhausting it sends one terminal
//! notification and surfaces [`FetchError::RetriesExhausted`], which the
//! caller turns into a non-zero exit. No partial table is ever returned.

use std::collections::HashMap;

use chrono::Local;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::clock::Clock;
use crate::config::{Location, RetryPolicy};
use crate::error::{FetchError, FetchResult};
use crate::notify::{self, Notify};
use crate::timetable::TimeTable;

const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Relevant shape of the Aladhan response body.
#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: Option<TimingsData>,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Option<HashMap<String, String>>,
}

/// HTTP client for the `timingsByCity` endpoint.
pub struct TimingsClient {
    http: Client,
    base_url: String,
}

impl Default for TimingsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different API root (tests use a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One fetch attempt for today's table.
    pub fn fetch_once(&self, location: &Location) -> FetchResult<TimeTable> {
        self.fetch_url(&self.endpoint(location))
    }

    /// Fetch today's table under `policy`. After every failed attempt except
    /// the last, sleeps exactly `policy.delay`; after the last, sends the
    /// terminal notification and gives up.
    pub fn fetch_with_retry(
        &self,
        location: &Location,
        policy: &RetryPolicy,
        clock: &dyn Clock,
        notifier: &dyn Notify,
    ) -> FetchResult<TimeTable> {
        let url = self.endpoint(location);
        println!("Using API URL: {url}");
        run_with_retry(policy, clock, notifier, |_| self.fetch_url(&url))
    }

    /// Endpoint for today's local date. The date is resolved once per fetch,
    /// not once per attempt.
    fn endpoint(&self, location: &Location) -> String {
        let date = Local::now().format("%d-%m-%Y");
        format!(
            "{}/timingsByCity/{}?city={}&country={}",
            self.base_url, date, location.city, location.country
        )
    }

    fn fetch_url(&self, url: &str) -> FetchResult<TimeTable> {
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let body: TimingsResponse = resp
            .json()
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;
        let timings = body
            .data
            .and_then(|d| d.timings)
            .ok_or_else(|| FetchError::MalformedPayload("missing data.timings".into()))?;

        Ok(TimeTable::from_timings(&timings))
    }
}

/// Run `attempt` under the fixed-delay policy.
///
/// Sleeps `policy.delay` between failed attempts -- never after a success
/// and never after the final failure. Exhausting the budget sends exactly
/// one terminal notification through the sink.
fn run_with_retry<T>(
    policy: &RetryPolicy,
    clock: &dyn Clock,
    notifier: &dyn Notify,
    mut attempt: impl FnMut(u32) -> FetchResult<T>,
) -> FetchResult<T> {
    for n in 1..=policy.max_attempts {
        match attempt(n) {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!("Attempt {n} failed: {e}");
                if n < policy.max_attempts {
                    eprintln!("Retrying in {} seconds...", policy.delay.as_secs());
                    clock.sleep(policy.delay);
                }
            }
        }
    }
    notifier.send(notify::APP_NAME, notify::FETCH_FAILED_BODY);
    Err(FetchError::RetriesExhausted {
        attempts: policy.max_attempts,
    })
}
