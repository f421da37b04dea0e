//! UTC instants as sent to the backend in `created_at`.

use std::fmt;
use std::str::FromStr;

use jiff::{civil, Timestamp};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{WallClock, Zone};
use crate::error::{HealthError, Result};

/// An absolute point in time.
///
/// Displays and serializes as ISO-8601 in UTC at seconds precision, e.g.
/// `2024-06-15T20:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(Timestamp);

impl Instant {
    /// The current instant.
    pub fn now() -> Self {
        Self(Timestamp::now())
    }

    /// Parses an RFC 3339 / ISO-8601 instant. Both `Z` and numeric offsets
    /// are accepted.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse::<Timestamp>().map(Self).map_err(|e| {
            HealthError::invalid_input("instant").with_reason(format!("'{s}': {e}"))
        })
    }

    /// The underlying timestamp.
    pub fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Renders this instant as the wall-clock date and time observed in
    /// `zone`. Seconds are dropped.
    pub fn to_wall_clock(&self, zone: &Zone) -> WallClock {
        let zoned = self.0.to_zoned(zone.time_zone().clone());
        WallClock::new(
            zoned.date(),
            civil::time(zoned.hour(), zoned.minute(), 0, 0),
        )
    }
}

impl From<Timestamp> for Instant {
    fn from(ts: Timestamp) -> Self {
        Self(ts)
    }
}

impl FromStr for Instant {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%dT%H:%M:%SZ"))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Instant::parse(&raw).map_err(de::Error::custom)
    }
}
