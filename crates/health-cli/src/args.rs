use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Convert meal and activity times between the user's clock and UTC
///
/// Dates and times are read in the timezone given by --timezone, else the
/// one stored in the settings file, else UTC. The printed instant is what
/// the backend expects in a `created_at` field.
#[derive(Parser)]
#[command(version, about, name = "health")]
pub struct Args {
    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/simple-health/settings.json
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// IANA timezone to use instead of the configured one
    #[arg(short = 'z', long, global = true)]
    pub timezone: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the health CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a local date and time to a UTC instant
    #[command(alias = "c")]
    Convert(ConvertArgs),
    /// Show the current date and time in the user's timezone
    Now,
    /// Show a UTC instant on the user's clock
    #[command(alias = "l")]
    Local(LocalArgs),
    /// Manage stored settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(ClapArgs)]
pub struct ConvertArgs {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Wall-clock time, HH:MM (24-hour)
    pub time: String,
}

#[derive(ClapArgs)]
pub struct LocalArgs {
    /// ISO-8601 instant, e.g. 2024-06-15T20:00:00Z
    pub instant: String,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,
    /// Update and save settings
    Set(SetSettingsArgs),
}

#[derive(ClapArgs)]
pub struct SetSettingsArgs {
    /// IANA timezone to store
    #[arg(value_name = "TIMEZONE")]
    pub zone: Option<String>,
    /// Enable or disable dark mode
    #[arg(long)]
    pub darkmode: Option<bool>,
}
