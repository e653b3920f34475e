//! Game state: the per-session aggregate the turn machine mutates.
//!
//! ## GameState
//!
//! One value owns everything a game in progress needs:
//! - The dealt board (card instances with their `matched`/`selected` flags)
//! - The pending selection, move count, and star rating
//! - The game clock
//! - The last comparison outcome and last revealed symbol
//! - The first-interaction and cooldown flags
//! - The session RNG
//!
//! There are no globals: a `GameState` is owned by a single
//! [`GameSession`](crate::session::GameSession) and passed by reference to
//! the turn machine and scorer. The presentation layer reads domain state
//! from here; it never owns `matched`/`selected` itself.

use serde::{Deserialize, Serialize};

use super::clock::GameClock;
use super::position::BoardPosition;
use super::rng::GameRng;
use crate::cards::{CardInstance, SymbolId};

/// Outcome of the most recent completed pair comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// No comparison has completed yet this game.
    #[default]
    None,
    /// The last pair matched.
    Matched,
    /// The last pair did not match.
    Mismatched,
    /// The last pair matched and completed the board.
    Won,
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchResult::None => "",
            MatchResult::Matched => "match",
            MatchResult::Mismatched => "mismatch",
            MatchResult::Won => "won",
        };
        write!(f, "{}", label)
    }
}

/// Star rating, 0..=3, derived solely from the move count.
///
/// Starts at [`StarRating::FULL`] and only ever goes down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StarRating(u8);

impl StarRating {
    /// The rating every game starts with.
    pub const FULL: StarRating = StarRating(3);

    /// Create a rating. Panics above 3 - there is no such rating.
    #[must_use]
    pub fn new(stars: u8) -> Self {
        assert!(stars <= 3, "Star rating is 0..=3, got {}", stars);
        Self(stars)
    }

    /// Number of stars, 0..=3.
    #[must_use]
    pub const fn count(self) -> u8 {
        self.0
    }

    /// Star glyphs for the presentation layer ("★" repeated `count` times).
    #[must_use]
    pub fn glyphs(self) -> String {
        "★".repeat(self.0 as usize)
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full state of one game in progress.
///
/// Mutated exclusively through the turn machine
/// ([`turns::select`](crate::turns::select)), the clock tick, and the
/// scheduler-deferred actions applied by the session.
pub struct GameState {
    /// The dealt board. Replaced wholesale on replay.
    pub board: Vec<CardInstance>,

    /// The pending card, if a turn is half-complete.
    pub selected: Option<BoardPosition>,

    /// Completed pair comparisons this game.
    pub moves: u32,

    /// Current star rating (monotonic non-increasing).
    pub stars: StarRating,

    /// The game clock.
    pub clock: GameClock,

    /// Outcome of the most recent completed comparison.
    pub last_result: MatchResult,

    /// The most recently revealed symbol (status line / meaning panel).
    pub last_symbol: Option<SymbolId>,

    /// True until the first accepted selection of the game.
    pub first_interaction: bool,

    /// Cooldown flag: false while pair feedback is still playing out.
    pub input_enabled: bool,

    /// Deterministic RNG for dealing.
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh state with an empty board.
    ///
    /// The caller deals the board; see [`board::deal`](crate::board::deal).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            board: Vec::new(),
            selected: None,
            moves: 0,
            stars: StarRating::FULL,
            clock: GameClock::new(),
            last_result: MatchResult::None,
            last_symbol: None,
            first_interaction: true,
            input_enabled: true,
            rng: GameRng::new(seed),
        }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.board.len()
    }

    /// Get the card at a position.
    ///
    /// Panics on an out-of-range position: every position handed to the
    /// engine comes from the dealt board, so a bad one is a construction bug.
    #[must_use]
    pub fn card(&self, position: BoardPosition) -> &CardInstance {
        assert!(
            position.index() < self.board.len(),
            "{} is outside the dealt board ({} cards)",
            position,
            self.board.len()
        );
        &self.board[position.index()]
    }

    /// Get the card at a position, mutably. Same panic contract as [`card`].
    ///
    /// [`card`]: GameState::card
    pub fn card_mut(&mut self, position: BoardPosition) -> &mut CardInstance {
        assert!(
            position.index() < self.board.len(),
            "{} is outside the dealt board ({} cards)",
            position,
            self.board.len()
        );
        &mut self.board[position.index()]
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.board.iter().all(|card| card.matched)
    }

    /// Positions of cards currently selected but not matched.
    ///
    /// During a mismatch feedback window this is the revealed pair; between
    /// turns it is at most the single pending card.
    pub fn unmatched_selected(&self) -> impl Iterator<Item = BoardPosition> + '_ {
        self.board
            .iter()
            .filter(|card| card.selected && !card.matched)
            .map(|card| card.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_card_board() -> Vec<CardInstance> {
        vec![
            CardInstance::new(SymbolId::new(1), BoardPosition::new(0)),
            CardInstance::new(SymbolId::new(1), BoardPosition::new(1)),
        ]
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert_eq!(state.moves, 0);
        assert_eq!(state.stars, StarRating::FULL);
        assert_eq!(state.last_result, MatchResult::None);
        assert!(state.first_interaction);
        assert!(state.input_enabled);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_all_matched() {
        let mut state = GameState::new(42);
        state.board = two_card_board();
        assert!(!state.all_matched());

        for card in &mut state.board {
            card.matched = true;
        }
        assert!(state.all_matched());
    }

    #[test]
    fn test_unmatched_selected() {
        let mut state = GameState::new(42);
        state.board = two_card_board();
        state.board[0].selected = true;
        state.board[1].selected = true;
        state.board[1].matched = true;

        let selected: Vec<_> = state.unmatched_selected().collect();
        assert_eq!(selected, vec![BoardPosition::new(0)]);
    }

    #[test]
    #[should_panic(expected = "outside the dealt board")]
    fn test_out_of_range_position_panics() {
        let mut state = GameState::new(42);
        state.board = two_card_board();
        let _ = state.card(BoardPosition::new(5));
    }

    #[test]
    fn test_star_rating_bounds() {
        assert_eq!(StarRating::new(0).count(), 0);
        assert_eq!(StarRating::FULL.count(), 3);
        assert_eq!(StarRating::new(2).glyphs(), "★★");
        assert!(StarRating::new(1) < StarRating::new(2));
    }

    #[test]
    #[should_panic(expected = "Star rating is 0..=3")]
    fn test_star_rating_above_three_panics() {
        let _ = StarRating::new(4);
    }

    #[test]
    fn test_match_result_display() {
        assert_eq!(format!("{}", MatchResult::None), "");
        assert_eq!(format!("{}", MatchResult::Matched), "match");
        assert_eq!(format!("{}", MatchResult::Mismatched), "mismatch");
        assert_eq!(format!("{}", MatchResult::Won), "won");
    }

    #[test]
    fn test_match_result_serde() {
        let json = serde_json::to_string(&MatchResult::Won).unwrap();
        let deserialized: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, MatchResult::Won);
    }
}
