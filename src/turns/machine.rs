//! Turn state machine - the two-phase selection/match cycle.
//!
//! One turn: `Idle` (no card pending) → `OneSelected` (one card face-up,
//! recorded in `state.selected`) → back to `Idle` once the second selection
//! resolves the pair. The machine owns every domain mutation of a turn:
//! flags, move count, star clamp, win detection, clock start/stop. What it
//! does *not* do is wait - the caller schedules the timed feedback
//! (overlay flashes, mismatch un-reveal, cooldown end) from the returned
//! [`TurnOutcome`].
//!
//! Input during the cooldown window and activation of a face-up card are
//! deliberate no-ops, reported as [`TurnOutcome::Ignored`] - never errors.

use crate::core::position::BoardPosition;
use crate::core::state::{GameState, MatchResult};

use super::scorer;

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Pair feedback is still playing out; input is suppressed.
    Cooldown,
    /// The card is already face-up (pending or matched).
    AlreadyFaceUp,
}

/// What a call to [`select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing happened; see the reason.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Revealed(BoardPosition),
    /// Second card completed the pair and it matched.
    Matched {
        pair: [BoardPosition; 2],
        /// True when this match completed the board.
        won: bool,
    },
    /// Second card completed the pair and it did not match.
    Mismatched { pair: [BoardPosition; 2] },
}

impl TurnOutcome {
    /// Was the selection accepted (not a no-op)?
    #[must_use]
    pub fn accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Ignored(_))
    }
}

/// Select the card at `position`.
///
/// Panics on an out-of-range position (construction bug). All other inputs
/// are handled: cooldown and face-up targets no-op, a first selection turns
/// the card face-up and records it as pending, a second selection counts the
/// move, re-clamps the star rating, and resolves the pair.
///
/// On a match both cards retire (`matched = true`, `selected` cleared); if
/// that was the last pair the game is won and the clock stops. On a mismatch
/// both cards stay face-up - the scheduled feedback clears them when the
/// cooldown window ends. Either way the pending reference is cleared and
/// input is disabled until the caller's scheduler restores it.
pub fn select(state: &mut GameState, position: BoardPosition) -> TurnOutcome {
    if !state.input_enabled {
        return TurnOutcome::Ignored(IgnoreReason::Cooldown);
    }

    let card = *state.card(position);
    if card.face_up() {
        return TurnOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
    }

    if state.first_interaction {
        state.first_interaction = false;
        state.clock.start();
    }
    state.last_symbol = Some(card.symbol);

    let Some(first) = state.selected else {
        state.card_mut(position).selected = true;
        state.selected = Some(position);
        return TurnOutcome::Revealed(position);
    };

    // Second of the pair: this completes a comparison.
    state.card_mut(position).selected = true;
    state.selected = None;
    state.moves += 1;
    scorer::apply(state);
    state.input_enabled = false;

    let pair = [first, position];
    if state.card(first).pairs_with(&card) {
        for pos in pair {
            let card = state.card_mut(pos);
            card.matched = true;
            card.selected = false;
        }

        if state.all_matched() {
            state.last_result = MatchResult::Won;
            state.clock.stop();
            TurnOutcome::Matched { pair, won: true }
        } else {
            state.last_result = MatchResult::Matched;
            TurnOutcome::Matched { pair, won: false }
        }
    } else {
        state.last_result = MatchResult::Mismatched;
        TurnOutcome::Mismatched { pair }
    }
}
