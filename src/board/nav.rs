//! Keyboard focus navigation over the 4-column grid.
//!
//! The presentation layer calls [`next_focus`] on arrow/Home/End input and
//! moves focus to the returned position. Movement rules for the standard
//! 16-card board (positions 0-15):
//!
//! - Left/Right move by ±1 through the whole grid, crossing row boundaries,
//!   clamped at positions 0 and 15.
//! - Up/Down move by ±4 within a column; leaving the first or last row wraps
//!   to the corresponding column of the opposite row.
//! - Home/End jump to the first/last position of the current row.

use crate::core::position::BoardPosition;

/// Number of columns on the board.
pub const GRID_COLUMNS: usize = 4;

/// A navigation key the grid responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Where focus lands after pressing `key` at `from` on a board of
/// `card_count` cards.
///
/// Returns `from` itself when the key cannot move focus (the grid-end
/// clamps). Panics if the board is not a whole number of 4-column rows or
/// `from` is off the board - both are construction bugs.
#[must_use]
pub fn next_focus(from: BoardPosition, key: NavKey, card_count: usize) -> BoardPosition {
    assert!(
        card_count > 0 && card_count % GRID_COLUMNS == 0,
        "Board must be whole 4-column rows, got {} cards",
        card_count
    );
    assert!(
        from.index() < card_count,
        "{} is outside the {}-card board",
        from,
        card_count
    );

    let index = from.index();
    let last = card_count - 1;
    let row_start = index - index % GRID_COLUMNS;
    let column = index % GRID_COLUMNS;
    let last_row_start = card_count - GRID_COLUMNS;

    let target = match key {
        NavKey::Left => index.saturating_sub(1),
        NavKey::Right => (index + 1).min(last),
        NavKey::Up => {
            if index < GRID_COLUMNS {
                // First row wraps to the last row, same column
                last_row_start + column
            } else {
                index - GRID_COLUMNS
            }
        }
        NavKey::Down => {
            if index >= last_row_start {
                // Last row wraps to the first row, same column
                column
            } else {
                index + GRID_COLUMNS
            }
        }
        NavKey::Home => row_start,
        NavKey::End => row_start + GRID_COLUMNS - 1,
    };

    BoardPosition::new(target as u8)
}
