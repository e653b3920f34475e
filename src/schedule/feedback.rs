//! Feedback scripts - the timed phases that follow a resolved pair.
//!
//! A resolved pair plays out as a fixed `(delay, action)` script on the
//! session's scheduler: overlay flashes against the pair, the mismatch
//! un-reveal, the cooldown end, and (on a win) the summary request. Timings
//! are configurable; the defaults match the classic presentation - cards
//! shown for 300 ms, 200 ms flash phases, an 1100 ms cooldown window, and
//! the summary 1000 ms after the winning reveal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::position::BoardPosition;
use crate::turns::TurnOutcome;

/// The cards a deferred action targets - at most one pair.
pub type CardSet = SmallVec<[BoardPosition; 2]>;

/// Feedback timing parameters, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the pair stays plainly visible before the first flash.
    pub reveal_ms: u64,

    /// Length of each overlay flash phase.
    pub flash_ms: u64,

    /// Cooldown window: input is suppressed this long after a pair
    /// resolves, and a mismatched pair flips back at its end.
    pub input_cooldown_ms: u64,

    /// Extra delay between the winning reveal and the summary request.
    pub summary_grace_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_ms: 300,
            flash_ms: 200,
            input_cooldown_ms: 1100,
            summary_grace_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Override the reveal delay.
    #[must_use]
    pub fn with_reveal_ms(mut self, ms: u64) -> Self {
        self.reveal_ms = ms;
        self
    }

    /// Override the flash phase length.
    #[must_use]
    pub fn with_flash_ms(mut self, ms: u64) -> Self {
        self.flash_ms = ms;
        self
    }

    /// Override the cooldown window.
    #[must_use]
    pub fn with_input_cooldown_ms(mut self, ms: u64) -> Self {
        self.input_cooldown_ms = ms;
        self
    }

    /// Override the summary grace delay.
    #[must_use]
    pub fn with_summary_grace_ms(mut self, ms: u64) -> Self {
        self.summary_grace_ms = ms;
        self
    }
}

/// Overlay tint flashed against a resolved pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayColor {
    /// Match flash.
    Green,
    /// Mismatch flash.
    Red,
    /// Back to no tint.
    Clear,
}

/// A deferred engine action.
///
/// `Overlay` and `OpenSummary` are presentation signals; `ClearSelection`
/// and `RestoreInput` mutate domain state when the session applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Tint (or untint) the pair.
    Overlay { cards: CardSet, color: OverlayColor },
    /// Flip a mismatched pair back face-down.
    ClearSelection { cards: CardSet },
    /// End the cooldown window.
    RestoreInput,
    /// Request the end-of-game summary surface.
    OpenSummary,
}

/// The `(delay, action)` script for a turn outcome.
///
/// Empty for outcomes that schedule nothing (ignored input, a first-of-pair
/// reveal). Actions sharing a due time are listed in firing order.
#[must_use]
pub fn script_for(timings: &TimingConfig, outcome: &TurnOutcome) -> Vec<(u64, Deferred)> {
    match outcome {
        TurnOutcome::Ignored(_) | TurnOutcome::Revealed(_) => Vec::new(),
        TurnOutcome::Matched { pair, won } => {
            let mut script = flash_script(timings, *pair, OverlayColor::Green);
            script.push((timings.input_cooldown_ms, Deferred::RestoreInput));
            if *won {
                script.push((
                    timings.reveal_ms + timings.summary_grace_ms,
                    Deferred::OpenSummary,
                ));
            }
            script
        }
        TurnOutcome::Mismatched { pair } => {
            let mut script = flash_script(timings, *pair, OverlayColor::Red);
            script.push((timings.input_cooldown_ms, Deferred::RestoreInput));
            script.push((
                timings.input_cooldown_ms,
                Deferred::ClearSelection {
                    cards: CardSet::from_slice(pair),
                },
            ));
            script
        }
    }
}

/// Two tint/untint cycles starting after the reveal delay.
fn flash_script(
    timings: &TimingConfig,
    pair: [BoardPosition; 2],
    color: OverlayColor,
) -> Vec<(u64, Deferred)> {
    let cards = CardSet::from_slice(&pair);
    let phases = [color, OverlayColor::Clear, color, OverlayColor::Clear];

    phases
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let delay = timings.reveal_ms + timings.flash_ms * i as u64;
            (
                delay,
                Deferred::Overlay {
                    cards: cards.clone(),
                    color,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> [BoardPosition; 2] {
        [BoardPosition::new(0), BoardPosition::new(5)]
    }

    fn delays(script: &[(u64, Deferred)]) -> Vec<u64> {
        script.iter().map(|(delay, _)| *delay).collect()
    }

    #[test]
    fn test_default_timings() {
        let timings = TimingConfig::default();
        assert_eq!(timings.reveal_ms, 300);
        assert_eq!(timings.flash_ms, 200);
        assert_eq!(timings.input_cooldown_ms, 1100);
        assert_eq!(timings.summary_grace_ms, 1000);
    }

    #[test]
    fn test_builder_overrides() {
        let timings = TimingConfig::default()
            .with_reveal_ms(10)
            .with_flash_ms(5)
            .with_input_cooldown_ms(40)
            .with_summary_grace_ms(20);

        assert_eq!(timings.reveal_ms, 10);
        assert_eq!(timings.flash_ms, 5);
        assert_eq!(timings.input_cooldown_ms, 40);
        assert_eq!(timings.summary_grace_ms, 20);
    }

    #[test]
    fn test_match_script_cadence() {
        let timings = TimingConfig::default();
        let script = script_for(
            &timings,
            &TurnOutcome::Matched {
                pair: pair(),
                won: false,
            },
        );

        assert_eq!(delays(&script), vec![300, 500, 700, 900, 1100]);
        assert!(matches!(
            script[0].1,
            Deferred::Overlay {
                color: OverlayColor::Green,
                ..
            }
        ));
        assert!(matches!(
            script[1].1,
            Deferred::Overlay {
                color: OverlayColor::Clear,
                ..
            }
        ));
        assert_eq!(script[4].1, Deferred::RestoreInput);
    }

    #[test]
    fn test_mismatch_script_clears_selection() {
        let timings = TimingConfig::default();
        let script = script_for(&timings, &TurnOutcome::Mismatched { pair: pair() });

        assert_eq!(delays(&script), vec![300, 500, 700, 900, 1100, 1100]);
        assert!(matches!(
            script[0].1,
            Deferred::Overlay {
                color: OverlayColor::Red,
                ..
            }
        ));
        // Input restore fires before the un-reveal at the same due time
        assert_eq!(script[4].1, Deferred::RestoreInput);
        assert_eq!(
            script[5].1,
            Deferred::ClearSelection {
                cards: CardSet::from_slice(&pair())
            }
        );
    }

    #[test]
    fn test_win_script_requests_summary() {
        let timings = TimingConfig::default();
        let script = script_for(
            &timings,
            &TurnOutcome::Matched {
                pair: pair(),
                won: true,
            },
        );

        let (delay, action) = script.last().unwrap();
        assert_eq!(*delay, 1300);
        assert_eq!(*action, Deferred::OpenSummary);
    }

    #[test]
    fn test_no_script_for_reveal_or_ignored() {
        let timings = TimingConfig::default();
        assert!(script_for(&timings, &TurnOutcome::Revealed(BoardPosition::new(0))).is_empty());
        assert!(script_for(
            &timings,
            &TurnOutcome::Ignored(crate::turns::IgnoreReason::Cooldown)
        )
        .is_empty());
    }

    #[test]
    fn test_timing_config_serde() {
        let timings = TimingConfig::default();
        let json = serde_json::to_string(&timings).unwrap();
        let deserialized: TimingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(timings, deserialized);
    }
}
