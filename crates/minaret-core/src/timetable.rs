//! The day's prayer time table.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

/// The five daily prayers.
///
/// Payload keys outside this set (Sunrise, Sunset, Imsak, Midnight,
/// Firstthird, Lastthird, and anything the API adds later) are not prayers
/// and never enter a [`TimeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Capitalized name, matching the Aladhan payload spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fajr" => Ok(Prayer::Fajr),
            "Dhuhr" => Ok(Prayer::Dhuhr),
            "Asr" => Ok(Prayer::Asr),
            "Maghrib" => Ok(Prayer::Maghrib),
            "Isha" => Ok(Prayer::Isha),
            _ => Err(format!("Not a prayer: {}", s)),
        }
    }
}

/// Mapping from prayer to today's time.
///
/// Built once from a raw payload and immutable afterwards. An entry is
/// `None` when the source gave an empty or unusable timing for that prayer;
/// such entries are skippable and never fire.
#[derive(Debug, Clone)]
pub struct TimeTable {
    entries: BTreeMap<Prayer, Option<NaiveTime>>,
}

impl TimeTable {
    /// Build from raw payload timings, keeping only the five prayers.
    pub fn from_timings(timings: &HashMap<String, String>) -> Self {
        let mut entries = BTreeMap::new();
        for prayer in Prayer::ALL {
            let time = timings.get(prayer.as_str()).and_then(|raw| parse_time(raw));
            entries.insert(prayer, time);
        }
        Self { entries }
    }

    pub fn get(&self, prayer: Prayer) -> Option<NaiveTime> {
        self.entries.get(&prayer).copied().flatten()
    }

    /// All entries, skippable `None` times included.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<NaiveTime>)> + '_ {
        self.entries.iter().map(|(p, t)| (*p, *t))
    }
}

/// Parse an `HH:MM` timing string. Empty or decorated values that do not
/// parse yield `None` rather than an error -- a prayer without a usable time
/// today is simply skipped.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}
