//! Game clock - the free-running seconds/minutes timer.
//!
//! The clock starts on the first accepted selection of a game (not at
//! construction), ticks once per presentation-layer second, stops on win,
//! and resets to 0:00 on replay. Ticks received while stopped are ignored,
//! so elapsed time is frozen the moment the winning pair resolves.

use serde::{Deserialize, Serialize};

/// Seconds/minutes timer for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    minutes: u32,
    seconds: u8,
    running: bool,
}

impl GameClock {
    /// Create a stopped clock at 0:00.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the clock, freezing the elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and reset to 0:00.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one second. No-op while stopped.
    ///
    /// Seconds roll over to minutes at 60.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.seconds + 1 == 60 {
            self.minutes += 1;
            self.seconds = 0;
        } else {
            self.seconds += 1;
        }
    }

    /// Is the clock currently running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed whole minutes.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Elapsed seconds within the current minute (0..60).
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Zero-padded `MM:SS` string for the presentation layer.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}
