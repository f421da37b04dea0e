//! Local wall-clock time to UTC conversion.
//!
//! The offset applied is the one the zone observes for the given civil
//! datetime, so the same wall time maps to different UTC instants on either
//! side of a daylight saving transition.
//!
//! # Gaps and folds
//!
//! Around a transition some wall times are ambiguous:
//!
//! - **Gap** (spring forward): the wall time never occurs. `02:30` in
//!   `America/New_York` on 2024-03-10 is read with the offset in force before
//!   the jump (`-05:00`) and lands on `07:30Z`, i.e. 03:30 EDT.
//! - **Fold** (fall back): the wall time occurs twice. `01:30` in
//!   `America/New_York` on 2024-11-03 is read with the offset in force before
//!   the repeat (`-04:00`) and lands on `05:30Z`, the earlier of the two.
//!
//! Both cases use the pre-transition offset. [`LocalDateTime::resolve`]
//! reports which case applied.
//!
//! # Examples
//!
//! ```rust
//! use health_core::convert;
//!
//! let winter = convert("2024-01-15", "12:00", "America/New_York").unwrap();
//! let summer = convert("2024-07-15", "12:00", "America/New_York").unwrap();
//! assert_eq!(winter.to_string(), "2024-01-15T17:00:00Z");
//! assert_eq!(summer.to_string(), "2024-07-15T16:00:00Z");
//! ```

use std::fmt;

use jiff::tz::{AmbiguousOffset, Offset};
use log::debug;

use crate::{
    error::{HealthError, Result},
    models::{Instant, LocalDateTime},
};

#[cfg(test)]
mod tests;

/// How a wall-clock time was mapped onto the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The wall time occurs exactly once.
    Exact,
    /// The wall time was skipped by a forward transition.
    Gap,
    /// The wall time was repeated by a backward transition.
    Fold,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Resolution::Exact => "exact",
            Resolution::Gap => "gap",
            Resolution::Fold => "fold",
        };
        f.write_str(label)
    }
}

/// Converts a form date (`YYYY-MM-DD`) and time (`HH:MM`), read in
/// `timezone`, to the UTC instant it denotes.
///
/// # Errors
///
/// - `HealthError::InvalidInput` if `date` or `time` is malformed
/// - `HealthError::InvalidTimezone` if `timezone` is not a known IANA zone
/// - `HealthError::InvalidInput` on field `date and time` if the instant
///   falls past the end of the supported range, which ends at
///   `9999-12-30T22:00:00Z`. Later wall times on 9999-12-30 and all of
///   9999-12-31 cannot be represented, even in UTC.
pub fn convert(date: &str, time: &str, timezone: &str) -> Result<Instant> {
    LocalDateTime::parse(date, time, timezone)?.to_instant()
}

impl LocalDateTime {
    /// The UTC instant this wall time denotes in its zone.
    pub fn to_instant(&self) -> Result<Instant> {
        self.resolve().map(|(instant, _)| instant)
    }

    /// Like [`LocalDateTime::to_instant`], also reporting whether the wall
    /// time fell in a gap or fold.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidInput` on field `date and time` only when
    /// the result would fall past `9999-12-30T22:00:00Z`.
    pub fn resolve(&self) -> Result<(Instant, Resolution)> {
        let civil = self.civil();
        let ambiguous = self.zone().time_zone().to_ambiguous_timestamp(civil);

        let (offset, resolution) = match ambiguous.offset() {
            AmbiguousOffset::Unambiguous { offset } => (offset, Resolution::Exact),
            AmbiguousOffset::Gap { before, after } => {
                debug!("{self} falls in a gap ({before} -> {after}); reading it as {before}");
                (before, Resolution::Gap)
            }
            AmbiguousOffset::Fold { before, after } => {
                debug!("{self} falls in a fold ({before} -> {after}); reading it as {before}");
                (before, Resolution::Fold)
            }
        };

        let timestamp = apply_offset(offset, self)?;
        Ok((Instant::from(timestamp), resolution))
    }
}

fn apply_offset(offset: Offset, local: &LocalDateTime) -> Result<jiff::Timestamp> {
    offset.to_timestamp(local.civil()).map_err(|e| {
        HealthError::invalid_input("date and time")
            .with_reason(format!("{local} is out of range: {e}"))
    })
}
