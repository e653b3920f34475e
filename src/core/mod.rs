//! Core engine types: positions, RNG, clock, game state.
//!
//! This module contains the fundamental building blocks shared by every
//! other subsystem. Nothing in here knows about turn rules or feedback
//! timing; it is the vocabulary the rest of the engine speaks.

pub mod clock;
pub mod position;
pub mod rng;
pub mod state;

pub use clock::GameClock;
pub use position::BoardPosition;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, MatchResult, StarRating};
