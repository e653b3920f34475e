//! Board subsystem: dealing and grid focus navigation.
//!
//! - `deck`: builds a doubled, shuffled board from the symbol catalog
//! - `nav`: keyboard focus movement over the 4-column grid

pub mod deck;
pub mod nav;

pub use deck::deal;
pub use nav::{next_focus, NavKey, GRID_COLUMNS};
