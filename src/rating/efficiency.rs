use log::info;

use super::types::{PlayerRating, RatingValue};
use crate::config::settings::EfficiencyWeights;
use crate::domain::{Player, StatLine};

/// Calculates a simplified efficiency rating from one stat line.
///
/// This is a weighted sum of the per-game averages, not the official
/// league PER formula. Stat values are taken as-is; nothing here
/// rejects zero or negative inputs.
pub fn calculate_efficiency(stats: &StatLine, weights: &EfficiencyWeights) -> RatingValue {
    stats.ppg * weights.ppg
        + stats.rpg * weights.rpg
        + stats.apg * weights.apg
        + stats.spg * weights.spg
        + stats.bpg * weights.bpg
}

/// Renders a rating with exactly two decimal places
pub fn format_rating(rating: RatingValue) -> String {
    format!("{rating:.2}")
}

/// Calculates ratings for every player, preserving roster order
pub fn rate_roster(players: &[Player], weights: &EfficiencyWeights) -> Vec<PlayerRating> {
    info!("Calculating efficiency ratings for {} players", players.len());

    players
        .iter()
        .map(|player| PlayerRating {
            name: player.name.clone(),
            team: player.team.clone(),
            rating: calculate_efficiency(&player.stats, weights),
        })
        .collect()
}
