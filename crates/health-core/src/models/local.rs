//! Wall-clock values, with and without an attached timezone.

use std::fmt;

use jiff::civil::{Date, DateTime, Time};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{Instant, Zone};
use crate::error::{HealthError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A date and time as entered in a form, read in a specific zone.
///
/// This is not yet an absolute instant; see [`LocalDateTime::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDateTime {
    date: Date,
    time: Time,
    zone: Zone,
}

impl LocalDateTime {
    pub fn new(date: Date, time: Time, zone: Zone) -> Self {
        Self { date, time, zone }
    }

    /// Parses `YYYY-MM-DD`, `HH:MM` and an IANA identifier.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidInput` naming `date` or `time` when either
    /// is malformed or out of range, and `HealthError::InvalidTimezone` when
    /// the zone is unknown. Inputs are checked in that order.
    pub fn parse(date: &str, time: &str, timezone: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        let zone = Zone::get(timezone)?;
        Ok(Self::new(date, time, zone))
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The date and time combined, still without a zone.
    pub fn civil(&self) -> DateTime {
        self.date.to_datetime(self.time)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.strftime(DATE_FORMAT),
            self.time.strftime(TIME_FORMAT),
            self.zone
        )
    }
}

/// A date and a minute-precision time as read on a local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    date: Date,
    time: Time,
}

impl WallClock {
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// The current date and time in `zone`, for prefilling forms.
    pub fn now_in(zone: &Zone) -> Self {
        Instant::now().to_wall_clock(zone)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.strftime(DATE_FORMAT).to_string()
    }

    /// `HH:MM`
    pub fn time_string(&self) -> String {
        self.time.strftime(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

impl Serialize for WallClock {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WallClock", 2)?;
        state.serialize_field("date", &self.date_string())?;
        state.serialize_field("time", &self.time_string())?;
        state.end()
    }
}

fn parse_date(input: &str) -> Result<Date> {
    if !matches_shape(input, "dddd-dd-dd") {
        return Err(HealthError::invalid_input("date")
            .with_reason(format!("'{input}' is not in YYYY-MM-DD form")));
    }
    Date::strptime(DATE_FORMAT, input)
        .map_err(|e| HealthError::invalid_input("date").with_reason(format!("'{input}': {e}")))
}

fn parse_time(input: &str) -> Result<Time> {
    if !matches_shape(input, "dd:dd") {
        return Err(HealthError::invalid_input("time")
            .with_reason(format!("'{input}' is not in HH:MM form")));
    }
    Time::strptime(TIME_FORMAT, input)
        .map_err(|e| HealthError::invalid_input("time").with_reason(format!("'{input}': {e}")))
}

/// Checks `input` byte by byte against `shape`, where `d` stands for an ASCII
/// digit and any other byte must match literally. Rejects signs, padding
/// spaces and extra digits that `strptime` would otherwise accept.
fn matches_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input
            .bytes()
            .zip(shape.bytes())
            .all(|(byte, expected)| match expected {
                b'd' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
}
