//! Deck builder - doubling and shuffling the catalog onto the board.
//!
//! Dealing produces each symbol exactly twice, shuffles the doubled
//! sequence, and fixes a `BoardPosition` on every instance in final order.
//! There are no side effects beyond the returned board; the caller decides
//! where it lives.

use crate::cards::{CardInstance, SymbolCatalog};
use crate::core::position::BoardPosition;
use crate::core::rng::GameRng;

/// Deal a fresh board from the catalog.
///
/// Returns `2 × catalog.len()` face-down cards. Symbol IDs are taken in
/// sorted order before shuffling, so the same seed always produces the same
/// deal no matter how the catalog was assembled. The shuffle is the textbook
/// inclusive-range Fisher–Yates provided by [`GameRng::shuffle`].
///
/// Panics on an empty catalog - a board with no cards is a construction
/// bug, not a runtime condition.
#[must_use]
pub fn deal(catalog: &SymbolCatalog, rng: &mut GameRng) -> Vec<CardInstance> {
    assert!(!catalog.is_empty(), "Cannot deal from an empty catalog");

    let ids = catalog.sorted_ids();
    let mut deck = Vec::with_capacity(ids.len() * 2);
    for &id in &ids {
        deck.push(id);
        deck.push(id);
    }

    rng.shuffle(&mut deck);

    deck.into_iter()
        .enumerate()
        .map(|(index, symbol)| CardInstance::new(symbol, BoardPosition::new(index as u8)))
        .collect()
}
