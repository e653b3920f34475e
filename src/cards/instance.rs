//! Card instances - runtime card state.
//!
//! `CardInstance` is one placed card on the board: a reference to its symbol
//! plus the mutable `matched`/`selected` flags the turn machine owns. The
//! presentation layer reads these flags to draw the card face-up, flipped
//! back, or retired - it never stores its own copy of them.

use serde::{Deserialize, Serialize};

use super::definition::SymbolId;
use crate::core::position::BoardPosition;

/// A card placed on the board for one deal.
///
/// Exactly two instances share each `SymbolId` - the matching pair.
/// Instances are created by the deck builder and replaced wholesale when the
/// board is redealt on replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// The symbol this card shows when face-up.
    pub symbol: SymbolId,

    /// Board slot, fixed at deal time.
    pub position: BoardPosition,

    /// Has this card's pair been found?
    pub matched: bool,

    /// Is this card currently face-up awaiting resolution?
    pub selected: bool,
}

impl CardInstance {
    /// Create a face-down card at a position.
    #[must_use]
    pub fn new(symbol: SymbolId, position: BoardPosition) -> Self {
        Self {
            symbol,
            position,
            matched: false,
            selected: false,
        }
    }

    /// Do two cards carry the same symbol?
    #[must_use]
    pub fn pairs_with(&self, other: &CardInstance) -> bool {
        self.symbol == other.symbol
    }

    /// Is this card face-up for any reason (pending or already matched)?
    ///
    /// Face-up cards ignore further activation.
    #[must_use]
    pub fn face_up(&self) -> bool {
        self.selected || self.matched
    }
}
