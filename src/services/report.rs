use anyhow::Result;
use log::info;

use crate::config::roster;
use crate::config::settings::AppConfig;
use crate::rating;

pub const REPORT_HEADER: &str = "Player Efficiency Ratings:";

/// Renders the per-player efficiency report for the console
pub struct ReportService {
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Generating Efficiency Report ===");
        print!("{}", self.render());
        info!("=== Report Complete ===");
        Ok(())
    }

    /// Builds the full report text: a header line, then one
    /// `<name>: <rating>` line per player in roster order.
    pub fn render(&self) -> String {
        let players = roster::roster();
        let ratings = rating::rate_roster(&players, &self.config.rating);

        let mut output = String::new();
        output.push_str(REPORT_HEADER);
        output.push('\n');

        for player_rating in &ratings {
            output.push_str(&format!(
                "{}: {}\n",
                player_rating.name,
                rating::format_rating(player_rating.rating)
            ));
        }

        output
    }
}
