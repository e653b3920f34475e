//! Session subsystem: one owned game and its presentation contract.
//!
//! ## Key Types
//!
//! - `GameSession` / `SessionBuilder`: owns a game from deal to summary
//! - `ViewEvent`: what the presentation layer should do after `advance`
//! - `result_sentence` / `moves_label`: the rendered result text

pub mod game;
pub mod summary;

pub use game::{GameSession, SessionBuilder, ViewEvent};
pub use summary::{moves_label, result_sentence};
