//! Scorer - star rating derived from the move count.
//!
//! A pure function of cumulative moves, evaluated after each completed pair
//! comparison. The machine clamps the state's rating downward with the
//! result, so a rating never recovers once lost.

use crate::core::state::{GameState, StarRating};

/// Last move count that keeps the full three-star rating.
pub const THREE_STAR_LIMIT: u32 = 12;
/// Last move count worth two stars.
pub const TWO_STAR_LIMIT: u32 = 16;
/// Last move count worth one star; beyond this the rating is zero.
pub const ONE_STAR_LIMIT: u32 = 20;

/// The rating a given cumulative move count is worth.
#[must_use]
pub fn rating_for_moves(moves: u32) -> StarRating {
    if moves <= THREE_STAR_LIMIT {
        StarRating::FULL
    } else if moves <= TWO_STAR_LIMIT {
        StarRating::new(2)
    } else if moves <= ONE_STAR_LIMIT {
        StarRating::new(1)
    } else {
        StarRating::new(0)
    }
}

/// Re-clamp the state's rating after a completed comparison.
///
/// Monotonic non-increasing: the stored rating is never raised.
pub fn apply(state: &mut GameState) {
    state.stars = state.stars.min(rating_for_moves(state.moves));
}
