use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "nba-player-ratings")]
pub struct Cli {
    /// Command (defaults to `ratings`)
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the efficiency rating report for every player on the roster
    Ratings,
    /// Dump the full roster with stat lines as JSON
    Roster,
}
