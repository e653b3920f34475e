//! Board positions - fixed slot indices on the dealt board.
//!
//! A `BoardPosition` is assigned to a card instance at deal time and never
//! changes for the lifetime of that deal. On the standard 4×4 board the
//! valid positions are 0..=15, numbered left to right, top to bottom.

use serde::{Deserialize, Serialize};

/// 0-based slot index of a card on the board.
///
/// Fixed at deal time; replay redeals and reassigns positions from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardPosition(pub u8);

impl BoardPosition {
    /// Create a new board position.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all positions of a board with `card_count` cards.
    pub fn all(card_count: usize) -> impl Iterator<Item = BoardPosition> {
        (0..card_count as u8).map(BoardPosition)
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_position() {
        let pos = BoardPosition::new(7);
        assert_eq!(pos.index(), 7);
        assert_eq!(format!("{}", pos), "Slot(7)");
    }

    #[test]
    fn test_all_positions() {
        let positions: Vec<_> = BoardPosition::all(16).collect();
        assert_eq!(positions.len(), 16);
        assert_eq!(positions[0], BoardPosition::new(0));
        assert_eq!(positions[15], BoardPosition::new(15));
    }

    #[test]
    fn test_ordering() {
        assert!(BoardPosition::new(3) < BoardPosition::new(12));
    }
}
