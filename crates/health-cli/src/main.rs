//! Simple Health CLI Application
//!
//! Command-line front end for turning form dates and times into the UTC
//! instants the backend stores.

mod args;
mod cli;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use health_core::UserSettings;
use log::info;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        settings_file,
        timezone,
        json,
        command,
    } = Args::parse();

    let settings = UserSettings::load(settings_file.as_deref());
    let cli = Cli::new(settings, settings_file, timezone, json);

    info!("health started");

    match command {
        Convert(args) => cli.convert(&args),
        Now => cli.now(),
        Local(args) => cli.local(&args),
        Settings { command } => cli.handle_settings_command(command),
    }
}
