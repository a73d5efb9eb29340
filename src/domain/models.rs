use serde::{Deserialize, Serialize};

/// Per-game statistical averages for a single player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
}

/// Player data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub stats: StatLine,
}

impl Player {
    pub fn new(name: &str, team: &str, stats: StatLine) -> Self {
        Self {
            name: name.to_string(),
            team: team.to_string(),
            stats,
        }
    }
}
