//! # concentration
//!
//! A memory-matching (concentration) game engine with a
//! presentation-agnostic core.
//!
//! ## Design Principles
//!
//! 1. **Domain Owns State**: `matched`/`selected` live on the card
//!    instances, the pending selection and counters on `GameState`. The
//!    presentation layer renders from them; it never keeps its own copy.
//!
//! 2. **One Session, No Globals**: everything a game needs is owned by a
//!    single `GameSession` and passed by reference to the turn machine and
//!    scorer.
//!
//! 3. **Explicit Time**: all deferred behavior - flash phases, the
//!    mismatch un-reveal, cooldown end, the summary request - is a
//!    `(delay, action)` script on one scheduler, driven by the host's
//!    `advance` calls. No callback nesting, no hidden timers.
//!
//! ## Architecture
//!
//! - **Deterministic Dealing**: seeded ChaCha8 RNG; a seed fully determines
//!   every deal of a session, including replays.
//!
//! - **Serialized Input**: a pair comparison is atomic relative to new
//!   input because the cooldown flag suppresses selections until the
//!   scheduled restore fires.
//!
//! ## Modules
//!
//! - `core`: Board positions, RNG, clock, game state
//! - `cards`: Symbol definitions, catalog, placed card instances
//! - `board`: Deck builder and keyboard grid navigation
//! - `turns`: The selection/match state machine and the scorer
//! - `schedule`: Deferred-action scheduler and feedback scripts
//! - `session`: Game session, builder, view events, result text

pub mod board;
pub mod cards;
pub mod core;
pub mod schedule;
pub mod session;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    BoardPosition, GameClock, GameRng, GameRngState, GameState, MatchResult, StarRating,
};

pub use crate::cards::{CardInstance, SymbolCatalog, SymbolDefinition, SymbolId};

pub use crate::board::{deal, next_focus, NavKey, GRID_COLUMNS};

pub use crate::turns::{rating_for_moves, select, IgnoreReason, TurnOutcome};

pub use crate::schedule::{script_for, CardSet, Deferred, OverlayColor, Scheduler, TimingConfig};

pub use crate::session::{moves_label, result_sentence, GameSession, SessionBuilder, ViewEvent};
