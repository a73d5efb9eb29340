use serde::Serialize;

pub type RatingValue = f64;

/// A player's computed efficiency rating, in roster order
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRating {
    pub name: String,
    pub team: String,
    pub rating: RatingValue,
}
