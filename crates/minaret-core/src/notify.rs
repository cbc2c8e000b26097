//! Desktop notification sink.
//!
//! Delivery is fire and forget: a failed send is reported on stderr and
//! otherwise ignored. The scheduler loop must never stall on the sink.

use std::path::PathBuf;

use chrono::NaiveTime;
use notify_rust::Notification;

use crate::timetable::Prayer;

pub const APP_NAME: &str = "minaret";

pub const STARTUP_BODY: &str = "Initialized minaret. Disable this notification with -n.";

pub const FETCH_FAILED_BODY: &str =
    "API Error; maybe you don't have internet access? Quitting minaret.";

/// Fire-and-forget notification sink.
pub trait Notify {
    fn send(&self, title: &str, body: &str);
}

/// Sends desktop notifications through the platform notification service.
pub struct DesktopNotifier {
    icon: Option<PathBuf>,
}

impl DesktopNotifier {
    /// `icon` is the resolved path of the bundled icon, passed in explicitly
    /// rather than derived from the working directory here.
    pub fn new(icon: Option<PathBuf>) -> Self {
        Self { icon }
    }
}

impl Notify for DesktopNotifier {
    fn send(&self, title: &str, body: &str) {
        let mut notification = Notification::new();
        notification.summary(title).body(body).appname(APP_NAME);
        if let Some(icon) = &self.icon {
            notification.icon(&icon.to_string_lossy());
        }
        if let Err(e) = notification.show() {
            eprintln!("warning: failed to send notification: {e}");
        }
    }
}

/// Title shared by the adhān and iqāma notifications.
pub fn prayer_title(prayer: Prayer) -> String {
    format!("{prayer} Time")
}

/// Body of the primary (adhān) notification.
pub fn adhan_body(prayer: Prayer, at: NaiveTime) -> String {
    format!(
        "It is {}, the time for the {prayer} adhān.",
        at.format("%H:%M")
    )
}

/// Body of the follow-up (iqāma) notification.
pub fn iqama_body(prayer: Prayer) -> String {
    format!("It is time for the {prayer} iqāma.")
}
