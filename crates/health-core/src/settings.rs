//! User settings: the preferred timezone and display mode.
//!
//! Settings live in a small JSON file, by default
//! `$XDG_CONFIG_HOME/simple-health/settings.json`:
//!
//! ```json
//! { "timezone": "America/New_York", "darkmode": false }
//! ```
//!
//! A missing or unreadable file means "not configured" and falls back to
//! [`UserSettings::default`]. A file that names an unknown timezone is not
//! a fallback case: [`UserSettings::zone`] reports it as an error so a bad
//! zone never silently turns into UTC.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{HealthError, Result},
    models::{Zone, DEFAULT_TIMEZONE},
};

const XDG_PREFIX: &str = "simple-health";
const SETTINGS_FILE: &str = "settings.json";

/// Per-user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// IANA timezone identifier used to read entered dates and times
    pub timezone: String,
    /// Dark display mode
    pub darkmode: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            darkmode: false,
        }
    }
}

impl UserSettings {
    /// Parses settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::FileSystem` if the file cannot be read and
    /// `HealthError::Serialization` if it is not valid settings JSON.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| HealthError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Loads settings from `path`, or from the XDG default location when
    /// `path` is `None`.
    ///
    /// Never fails: an absent file yields the defaults, and an unreadable
    /// or malformed one yields the defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(path) = Self::find_default_path() else {
                    debug!("No settings file found; using defaults");
                    return Self::default();
                };
                path
            }
        };

        if !path.exists() {
            debug!("Settings file {} does not exist; using defaults", path.display());
            return Self::default();
        }

        match Self::read(&path) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Writes the settings to `path`, or to the XDG default location when
    /// `path` is `None`, creating parent directories as needed. Returns the
    /// path written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| HealthError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(&path, json).map_err(|e| HealthError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        debug!("Saved settings to {}", path.display());
        Ok(path)
    }

    /// Resolves the configured timezone.
    ///
    /// An empty identifier counts as unset and gives UTC.
    ///
    /// # Errors
    ///
    /// Returns `HealthError::InvalidTimezone` for a configured identifier
    /// that is not in the tz database.
    pub fn zone(&self) -> Result<Zone> {
        if self.timezone.trim().is_empty() {
            return Ok(Zone::utc());
        }
        Zone::get(&self.timezone)
    }

    /// Returns the default settings path following the XDG Base Directory
    /// specification, creating its parent directory.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_config_file(SETTINGS_FILE)
            .map_err(|e| HealthError::XdgDirectory(e.to_string()))
    }

    fn find_default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(SETTINGS_FILE)
    }
}
