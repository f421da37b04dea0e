//! Command handlers for the health CLI.
//!
//! Each handler resolves the zone, calls into `health_core`, and prints the
//! result either as plain text or as JSON (`--json`).

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};
use health_core::{Instant, LocalDateTime, Resolution, UserSettings, WallClock, Zone};
use log::{debug, info};
use serde::Serialize;
use serde_json::json;

use crate::args::{ConvertArgs, LocalArgs, SetSettingsArgs, SettingsCommands};

/// CLI handler holding the loaded settings and global flags
pub struct Cli {
    settings: UserSettings,
    settings_file: Option<PathBuf>,
    timezone: Option<String>,
    json: bool,
}

impl Cli {
    pub fn new(
        settings: UserSettings,
        settings_file: Option<PathBuf>,
        timezone: Option<String>,
        json: bool,
    ) -> Self {
        Self {
            settings,
            settings_file,
            timezone,
            json,
        }
    }

    /// The zone to read wall-clock values in: `--timezone` wins over the
    /// settings file. Neither falls back to UTC once given.
    fn zone(&self) -> Result<Zone> {
        let zone = match &self.timezone {
            Some(name) => Zone::get(name),
            None => self.settings.zone(),
        };
        zone.context("Failed to resolve timezone")
    }

    pub fn convert(&self, args: &ConvertArgs) -> Result<()> {
        let zone = self.zone()?;
        let local = LocalDateTime::parse(&args.date, &args.time, zone.name())
            .context("Failed to read date and time")?;
        let (instant, resolution) = local.resolve().context("Failed to convert to UTC")?;

        if resolution != Resolution::Exact {
            info!("{local} is in a DST {resolution}; stored as {instant}");
        }

        self.emit(&instant, &json!({ "created_at": instant }))
    }

    pub fn now(&self) -> Result<()> {
        let zone = self.zone()?;
        let wall = WallClock::now_in(&zone);
        debug!("Current time in {zone}: {wall}");

        self.emit(&wall, &wall)
    }

    pub fn local(&self, args: &LocalArgs) -> Result<()> {
        let zone = self.zone()?;
        let instant = Instant::parse(&args.instant).context("Failed to read instant")?;
        let wall = instant.to_wall_clock(&zone);

        self.emit(&wall, &wall)
    }

    pub fn handle_settings_command(self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {
                let json = self
                    .settings
                    .to_json()
                    .context("Failed to serialize settings")?;
                println!("{json}");
                Ok(())
            }
            SettingsCommands::Set(args) => self.set_settings(args),
        }
    }

    fn set_settings(self, args: SetSettingsArgs) -> Result<()> {
        let mut settings = self.settings;

        if let Some(name) = args.zone.or(self.timezone) {
            let zone = Zone::get(&name).context("Refusing to store timezone")?;
            settings.timezone = zone.name().to_string();
        }
        if let Some(darkmode) = args.darkmode {
            settings.darkmode = darkmode;
        }

        let path = settings
            .save(self.settings_file.as_deref())
            .context("Failed to save settings")?;
        info!("Settings written to {}", path.display());

        if self.json {
            println!("{}", settings.to_json().context("Failed to serialize settings")?);
        } else {
            println!("Saved settings to {}", path.display());
        }
        Ok(())
    }

    fn emit<T: Serialize + ?Sized>(&self, plain: &dyn Display, value: &T) -> Result<()> {
        if self.json {
            let rendered =
                serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{rendered}");
        } else {
            println!("{plain}");
        }
        Ok(())
    }
}
