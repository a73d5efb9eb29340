use crate::domain::{Player, StatLine};

/// Get the fixed list of players to rate and display
///
/// Sample data for now; stat lines are season per-game averages. The
/// order here is the display order of the report.
pub fn roster() -> Vec<Player> {
    vec![
        Player::new(
            "LeBron James",
            "Los Angeles Lakers",
            StatLine {
                ppg: 27.2,
                rpg: 7.4,
                apg: 8.3,
                spg: 1.2,
                bpg: 0.8,
            },
        ),
        Player::new(
            "Stephen Curry",
            "Golden State Warriors",
            StatLine {
                ppg: 25.8,
                rpg: 5.2,
                apg: 6.3,
                spg: 1.3,
                bpg: 0.2,
            },
        ),
        Player::new(
            "Giannis Antetokounmpo",
            "Milwaukee Bucks",
            StatLine {
                ppg: 29.9,
                rpg: 11.6,
                apg: 5.8,
                spg: 1.1,
                bpg: 1.4,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_order_is_stable() {
        let players = roster();
        assert_eq!(players.len(), 3);

        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["LeBron James", "Stephen Curry", "Giannis Antetokounmpo"]
        );
    }

    #[test]
    fn test_roster_enumeration_is_repeatable() {
        let first = roster();
        let second = roster();
        assert_eq!(first, second);
    }

    #[test]
    fn test_roster_serializes_to_json() {
        let players = roster();
        let json = serde_json::to_string(&players).unwrap();
        let parsed: Vec<Player> = serde_json::from_str(&json).unwrap();
        assert_eq!(players, parsed);
    }
}
