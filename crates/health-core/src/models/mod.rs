//! Data models for timezone-aware timestamps.
//!
//! - [`LocalDateTime`]: a date and time as typed into a form, paired with the
//!   zone it should be read in
//! - [`Instant`]: the absolute UTC moment that ends up in `created_at`
//! - [`WallClock`]: an instant rendered back onto a local clock
//! - [`Zone`]: an IANA timezone checked against the tz database
//!
//! # Examples
//!
//! ```rust
//! use health_core::models::{Instant, Zone};
//!
//! let zone = Zone::get("Europe/Paris").unwrap();
//! let instant = Instant::parse("2024-06-15T12:00:00Z").unwrap();
//! assert_eq!(instant.to_wall_clock(&zone).to_string(), "2024-06-15 14:00");
//! ```

pub mod instant;
pub mod local;
pub mod zone;


pub use instant::Instant;
pub use local::{LocalDateTime, WallClock};
pub use zone::{Zone, DEFAULT_TIMEZONE};
