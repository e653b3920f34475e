//! Keyboard grid navigation over the standard 16-card board.

use concentration::core::BoardPosition;
use concentration::{next_focus, NavKey};

fn go(from: u8, key: NavKey) -> u8 {
    next_focus(BoardPosition::new(from), key, 16).0
}

#[test]
fn test_horizontal_walk_covers_the_grid() {
    // Right from 0 visits every position in order and parks at 15.
    let mut position = 0;
    for expected in 1..=15 {
        position = go(position, NavKey::Right);
        assert_eq!(position, expected);
    }
    assert_eq!(go(position, NavKey::Right), 15);

    // And back again.
    for expected in (0..=14).rev() {
        position = go(position, NavKey::Left);
        assert_eq!(position, expected);
    }
    assert_eq!(go(position, NavKey::Left), 0);
}

#[test]
fn test_vertical_movement_wraps_within_columns() {
    for column in 0..4u8 {
        // Down the column and wrap to the top.
        assert_eq!(go(column, NavKey::Down), column + 4);
        assert_eq!(go(column + 4, NavKey::Down), column + 8);
        assert_eq!(go(column + 8, NavKey::Down), column + 12);
        assert_eq!(go(column + 12, NavKey::Down), column);

        // Up the column and wrap to the bottom.
        assert_eq!(go(column, NavKey::Up), column + 12);
        assert_eq!(go(column + 12, NavKey::Up), column + 8);
    }
}

#[test]
fn test_home_and_end_stay_in_row() {
    for position in 0..16u8 {
        let row_start = position - position % 4;
        assert_eq!(go(position, NavKey::Home), row_start);
        assert_eq!(go(position, NavKey::End), row_start + 3);
    }
}

#[test]
fn test_every_move_lands_on_the_board() {
    let keys = [
        NavKey::Left,
        NavKey::Right,
        NavKey::Up,
        NavKey::Down,
        NavKey::Home,
        NavKey::End,
    ];

    for position in 0..16u8 {
        for key in keys {
            let target = go(position, key);
            assert!(target < 16, "{:?} from {} left the board", key, position);
        }
    }
}

#[test]
fn test_up_then_down_round_trips() {
    for position in 0..16u8 {
        assert_eq!(go(go(position, NavKey::Up), NavKey::Down), position);
        assert_eq!(go(go(position, NavKey::Down), NavKey::Up), position);
    }
}
