//! Game session - one owned game from deal to summary.
//!
//! `GameSession` ties the subsystems together: it owns the catalog, the
//! game state, the timing configuration, and the scheduler, and exposes the
//! four operations a presentation layer drives it with:
//!
//! - [`select`](GameSession::select) on pointer/keyboard activation
//! - [`tick`](GameSession::tick) once per second for the clock
//! - [`advance`](GameSession::advance) with elapsed milliseconds, rendering
//!   the returned [`ViewEvent`]s
//! - [`replay`](GameSession::replay) from the summary surface
//!
//! Everything the presentation layer draws it reads back out of
//! [`state`](GameSession::state) and the accessor helpers; the session owns
//! the domain flags, never the view.

use crate::board::deck;
use crate::cards::{CardInstance, SymbolCatalog, SymbolDefinition};
use crate::core::position::BoardPosition;
use crate::core::state::{GameState, StarRating};
use crate::schedule::{script_for, CardSet, Deferred, OverlayColor, Scheduler, TimingConfig};
use crate::turns::{self, TurnOutcome};

use super::summary;

/// What the presentation layer should do, produced by
/// [`GameSession::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Tint (or untint) the given cards.
    Overlay { cards: CardSet, color: OverlayColor },
    /// The given cards flipped back face-down; redraw them.
    SelectionCleared { cards: CardSet },
    /// The cooldown window ended; input is live again.
    InputRestored,
    /// Open the summary surface (see
    /// [`summary_sentence`](GameSession::summary_sentence)).
    SummaryReady,
}

/// Builder for a [`GameSession`].
///
/// ## Example
///
/// ```
/// use concentration::session::SessionBuilder;
///
/// let session = SessionBuilder::new().build(42);
/// assert_eq!(session.card_count(), 16);
/// ```
pub struct SessionBuilder {
    catalog: SymbolCatalog,
    timings: TimingConfig,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            catalog: SymbolCatalog::egyptian(),
            timings: TimingConfig::default(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play with a custom symbol catalog instead of the Egyptian set.
    #[must_use]
    pub fn symbols(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Override the feedback timings.
    #[must_use]
    pub fn timings(mut self, timings: TimingConfig) -> Self {
        self.timings = timings;
        self
    }

    /// Build the session and deal the first board.
    #[must_use]
    pub fn build(self, seed: u64) -> GameSession {
        let mut state = GameState::new(seed);
        state.board = deck::deal(&self.catalog, &mut state.rng);

        GameSession {
            catalog: self.catalog,
            timings: self.timings,
            state,
            scheduler: Scheduler::new(),
        }
    }
}

/// One game session: catalog, state, timings, and the feedback scheduler.
pub struct GameSession {
    catalog: SymbolCatalog,
    timings: TimingConfig,
    state: GameState,
    scheduler: Scheduler<Deferred>,
}

impl GameSession {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// A session with the default catalog and timings.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        SessionBuilder::new().build(seed)
    }

    /// Select the card at `position`, scheduling the outcome's feedback.
    pub fn select(&mut self, position: BoardPosition) -> TurnOutcome {
        let outcome = turns::select(&mut self.state, position);
        for (delay, action) in script_for(&self.timings, &outcome) {
            self.scheduler.after(delay, action);
        }
        outcome
    }

    /// Advance the clock one second.
    pub fn tick(&mut self) {
        self.state.clock.tick();
    }

    /// Advance feedback time by `delta_ms`, applying due deferred actions.
    ///
    /// Returns the view events in firing order.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<ViewEvent> {
        let due = self.scheduler.advance(delta_ms);
        let mut events = Vec::with_capacity(due.len());

        for action in due {
            match action {
                Deferred::Overlay { cards, color } => {
                    events.push(ViewEvent::Overlay { cards, color });
                }
                Deferred::ClearSelection { cards } => {
                    for position in &cards {
                        self.state.card_mut(*position).selected = false;
                    }
                    events.push(ViewEvent::SelectionCleared { cards });
                }
                Deferred::RestoreInput => {
                    self.state.input_enabled = true;
                    events.push(ViewEvent::InputRestored);
                }
                Deferred::OpenSummary => {
                    events.push(ViewEvent::SummaryReady);
                }
            }
        }

        events
    }

    /// Reset for another game: counters, rating, clock, and flags back to
    /// initial values, pending feedback dropped, and a freshly shuffled
    /// board dealt from the session's continuing RNG stream.
    pub fn replay(&mut self) {
        self.scheduler.clear();

        let state = &mut self.state;
        state.board = deck::deal(&self.catalog, &mut state.rng);
        state.selected = None;
        state.moves = 0;
        state.stars = StarRating::FULL;
        state.clock.reset();
        state.last_result = Default::default();
        state.last_symbol = None;
        state.first_interaction = true;
        state.input_enabled = true;
    }

    // === Presentation accessors ===

    /// The full game state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The symbol catalog in play.
    #[must_use]
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// The feedback timings in effect.
    #[must_use]
    pub fn timings(&self) -> &TimingConfig {
        &self.timings
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.state.card_count()
    }

    /// The card at a position. Panics off the board.
    #[must_use]
    pub fn card(&self, position: BoardPosition) -> &CardInstance {
        self.state.card(position)
    }

    /// Definition of the card's symbol at a position (meaning panel).
    #[must_use]
    pub fn symbol_at(&self, position: BoardPosition) -> &SymbolDefinition {
        self.catalog.get_unchecked(self.state.card(position).symbol)
    }

    /// Definition of the most recently revealed symbol (status line).
    #[must_use]
    pub fn last_symbol(&self) -> Option<&SymbolDefinition> {
        self.state
            .last_symbol
            .map(|id| self.catalog.get_unchecked(id))
    }

    /// `"1 move"` / `"n moves"` for the move counter.
    #[must_use]
    pub fn moves_label(&self) -> String {
        summary::moves_label(self.state.moves)
    }

    /// Zero-padded `MM:SS` clock string.
    #[must_use]
    pub fn clock_display(&self) -> String {
        self.state.clock.display()
    }

    /// Current star rating.
    #[must_use]
    pub fn stars(&self) -> StarRating {
        self.state.stars
    }

    /// The summary sentence for the current moves and elapsed time.
    #[must_use]
    pub fn summary_sentence(&self) -> String {
        summary::result_sentence(
            self.state.moves,
            self.state.clock.minutes(),
            self.state.clock.seconds(),
        )
    }
}
