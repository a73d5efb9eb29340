pub mod cli;
pub mod config;
pub mod domain;
pub mod rating;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command.unwrap_or(Command::Ratings)
}

pub fn handle_ratings() -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run()
}

pub fn handle_roster() -> Result<()> {
    let roster = config::roster::roster();
    let json = serde_json::to_string_pretty(&roster)?;
    println!("{json}");
    Ok(())
}
