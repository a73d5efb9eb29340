pub mod efficiency;
pub mod types;

pub use efficiency::{calculate_efficiency, format_rating, rate_roster};
pub use types::{PlayerRating, RatingValue};
