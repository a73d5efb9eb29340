use anyhow::Result;

use nba_player_ratings::cli::Command;
use nba_player_ratings::{handle_ratings, handle_roster, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Ratings => handle_ratings(),
        Command::Roster => handle_roster(),
    }
}
