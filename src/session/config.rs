//! Session configuration.

use serde::{Deserialize, Serialize};

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of drawn games after which a draw is announced as a strange
    /// game (default: 3). 0 disables the announcement.
    pub strange_game_after: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strange_game_after: 3,
        }
    }
}

impl SessionConfig {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw count that triggers the strange-game announcement.
    pub fn with_strange_game_after(mut self, draws: u32) -> Self {
        self.strange_game_after = draws;
        self
    }
}
