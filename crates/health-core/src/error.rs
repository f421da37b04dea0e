//! Error types for the health-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for conversion and settings operations.
#[derive(Error, Debug)]
pub enum HealthError {
    /// Malformed date, time or instant strings
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Timezone identifier not present in the tz database
    #[error("Unknown timezone '{name}'")]
    InvalidTimezone { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HealthError {
        HealthError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl HealthError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown-timezone error for `name`.
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimezone { name: name.into() }
    }

    /// Returns true for errors the user can fix by re-entering input.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            HealthError::InvalidInput { .. } | HealthError::InvalidTimezone { .. }
        )
    }
}

/// Result type alias for health-core operations
pub type Result<T> = std::result::Result<T, HealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = HealthError::invalid_input("time").with_reason("hour out of range");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'time': hour out of range"
        );
        assert!(err.is_user_input());
    }

    #[test]
    fn test_invalid_timezone_message() {
        let err = HealthError::invalid_timezone("Not/AZone");
        assert_eq!(err.to_string(), "Unknown timezone 'Not/AZone'");
        assert!(err.is_user_input());
    }

    #[test]
    fn test_xdg_error_is_not_user_input() {
        let err = HealthError::XdgDirectory("no home".to_string());
        assert!(!err.is_user_input());
    }
}
