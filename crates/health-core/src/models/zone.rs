//! Validated IANA timezone.

use std::fmt;
use std::str::FromStr;

use jiff::tz::TimeZone;

use crate::error::{HealthError, Result};

/// Identifier used when the user has not configured a timezone.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// An IANA timezone that has been looked up in the tz database.
///
/// Keeps the canonical tz database identifier alongside the resolved rules,
/// so two spellings of the same zone compare equal.
#[derive(Debug, Clone)]
pub struct Zone {
    name: String,
    tz: TimeZone,
}

impl Zone {
    /// Looks up `name` in the bundled tz database.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidTimezone` if the identifier is unknown.
    pub fn get(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case(DEFAULT_TIMEZONE) {
            return Ok(Self::utc());
        }
        let tz = TimeZone::get(name).map_err(|_| HealthError::invalid_timezone(name))?;
        // Lookup ignores case; keep the database spelling.
        let name = tz.iana_name().unwrap_or(name).to_string();
        Ok(Self { name, tz })
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self {
            name: DEFAULT_TIMEZONE.to_string(),
            tz: TimeZone::UTC,
        }
    }

    /// The canonical identifier, e.g. `America/New_York` for a lookup of
    /// `america/new_york`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Zone {}

impl FromStr for Zone {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::get(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
