//! Fetcher tests against a mock HTTP server.

use std::cell::RefCell;
use std::time::Duration;

use chrono::NaiveTime;
use minaret_core::clock::Clock;
use minaret_core::config::{Location, RetryPolicy};
use minaret_core::error::FetchError;
use minaret_core::fetch::TimingsClient;
use minaret_core::notify::Notify;
use minaret_core::timetable::Prayer;
use serde_json::json;

/// Clock that records sleeps without blocking the test.
struct RecordingClock {
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingClock {
    fn new() -> Self {
        Self {
            sleeps: RefCell::new(Vec::new()),
        }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    }

    fn sleep(&self, d: Duration) {
        self.sleeps.borrow_mut().push(d);
    }
}

struct RecordingNotifier {
    calls: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Notify for RecordingNotifier {
    fn send(&self, title: &str, body: &str) {
        self.calls.borrow_mut().push((title.into(), body.into()));
    }
}

fn location() -> Location {
    Location::new("Cairo", "Egypt").unwrap()
}

fn full_payload() -> String {
    json!({
        "data": {
            "timings": {
                "Fajr": "05:00",
                "Sunrise": "06:30",
                "Dhuhr": "12:30",
                "Asr": "15:45",
                "Sunset": "18:10",
                "Maghrib": "18:15",
                "Isha": "19:45",
                "Imsak": "04:50",
                "Midnight": "00:15",
                "Firstthird": "22:10",
                "Lastthird": "02:20"
            }
        }
    })
    .to_string()
}

fn timings_mock(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", mockito::Matcher::Regex(r"^/timingsByCity/".to_string()))
        .match_query(mockito::Matcher::Any)
}

#[test]
fn fetch_keeps_only_the_five_prayers() {
    let mut server = mockito::Server::new();
    let mock = timings_mock(&mut server)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(full_payload())
        .create();

    let client = TimingsClient::with_base_url(server.url());
    let table = client.fetch_once(&location()).unwrap();

    mock.assert();
    assert_eq!(table.iter().count(), 5);
    assert!(table.iter().all(|(_, t)| t.is_some()));
    assert_eq!(table.get(Prayer::Fajr), NaiveTime::from_hms_opt(5, 0, 0));
    assert_eq!(table.get(Prayer::Dhuhr), NaiveTime::from_hms_opt(12, 30, 0));
    assert_eq!(table.get(Prayer::Asr), NaiveTime::from_hms_opt(15, 45, 0));
    assert_eq!(table.get(Prayer::Maghrib), NaiveTime::from_hms_opt(18, 15, 0));
    assert_eq!(table.get(Prayer::Isha), NaiveTime::from_hms_opt(19, 45, 0));
}

#[test]
fn non_success_status_is_a_fetch_error() {
    let mut server = mockito::Server::new();
    let _mock = timings_mock(&mut server).with_status(502).create();

    let client = TimingsClient::with_base_url(server.url());
    let err = client.fetch_once(&location()).unwrap_err();

    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 502));
}

#[test]
fn missing_data_key_is_a_fetch_error() {
    let mut server = mockito::Server::new();
    let _mock = timings_mock(&mut server)
        .with_status(200)
        .with_body(json!({ "code": 200, "status": "OK" }).to_string())
        .create();

    let client = TimingsClient::with_base_url(server.url());
    let err = client.fetch_once(&location()).unwrap_err();

    assert!(matches!(err, FetchError::MalformedPayload(_)));
}

#[test]
fn missing_timings_key_is_a_fetch_error() {
    let mut server = mockito::Server::new();
    let _mock = timings_mock(&mut server)
        .with_status(200)
        .with_body(json!({ "data": { "date": "01-01-2026" } }).to_string())
        .create();

    let client = TimingsClient::with_base_url(server.url());
    let err = client.fetch_once(&location()).unwrap_err();

    assert!(matches!(err, FetchError::MalformedPayload(_)));
}

#[test]
fn non_json_body_is_a_fetch_error() {
    let mut server = mockito::Server::new();
    let _mock = timings_mock(&mut server)
        .with_status(200)
        .with_body("<html>gateway timeout</html>")
        .create();

    let client = TimingsClient::with_base_url(server.url());
    let err = client.fetch_once(&location()).unwrap_err();

    assert!(matches!(err, FetchError::MalformedPayload(_)));
}

#[test]
fn retry_exhaustion_hits_source_n_times() {
    let mut server = mockito::Server::new();
    let mock = timings_mock(&mut server).with_status(500).expect(3).create();

    let clock = RecordingClock::new();
    let notifier = RecordingNotifier::new();
    let policy = RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_secs(5),
    };

    let client = TimingsClient::with_base_url(server.url());
    let err = client
        .fetch_with_retry(&location(), &policy, &clock, &notifier)
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, FetchError::RetriesExhausted { attempts: 3 }));
    assert_eq!(
        *clock.sleeps.borrow(),
        vec![Duration::from_secs(5), Duration::from_secs(5)]
    );
    let calls = notifier.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "minaret");
    assert_eq!(
        calls[0].1,
        "API Error; maybe you don't have internet access? Quitting minaret."
    );
}

#[test]
fn successful_fetch_sleeps_and_notifies_nothing() {
    let mut server = mockito::Server::new();
    let _mock = timings_mock(&mut server)
        .with_status(200)
        .with_body(full_payload())
        .create();

    let clock = RecordingClock::new();
    let notifier = RecordingNotifier::new();

    let client = TimingsClient::with_base_url(server.url());
    let table = client
        .fetch_with_retry(&location(), &RetryPolicy::default(), &clock, &notifier)
        .unwrap();

    assert_eq!(table.iter().count(), 5);
    assert!(clock.sleeps.borrow().is_empty());
    assert!(notifier.calls.borrow().is_empty());
}
