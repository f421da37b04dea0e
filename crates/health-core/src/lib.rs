//! Core library for the Simple Health time toolkit.
//!
//! Meals and activities are logged with a date and a wall-clock time typed in
//! the user's own timezone, but the backend stores absolute UTC instants. This
//! crate does that translation and the reverse rendering used to prefill
//! forms.
//!
//! - [`convert`]: date + time + IANA zone → UTC [`Instant`]
//! - [`models`]: [`LocalDateTime`], [`Instant`], [`WallClock`], [`Zone`]
//! - [`settings`]: the user's stored timezone preference
//! - [`error`]: [`HealthError`] and the [`Result`] alias
//!
//! The timezone is always an explicit argument; nothing here reads ambient
//! state.
//!
//! # Quick Start
//!
//! ```rust
//! use health_core::{convert, UserSettings};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = UserSettings::from_json(r#"{"timezone":"America/Regina"}"#)?;
//! let zone = settings.zone()?;
//!
//! let created_at = convert("2024-06-15", "14:00", zone.name())?;
//! assert_eq!(created_at.to_string(), "2024-06-15T20:00:00Z");
//!
//! // And back onto the user's clock
//! let wall = created_at.to_wall_clock(&zone);
//! assert_eq!(wall.to_string(), "2024-06-15 14:00");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod convert;
pub mod error;
pub mod models;
pub mod settings;

// Re-export commonly used types
pub use convert::{convert, Resolution};
pub use error::{HealthError, Result};
pub use models::{Instant, LocalDateTime, WallClock, Zone, DEFAULT_TIMEZONE};
pub use settings::UserSettings;
