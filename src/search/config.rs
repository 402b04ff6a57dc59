//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::cell::CELL_COUNT;
use crate::error::{Error, Result};

/// Minimax configuration parameters.
///
/// The defaults are the engine's scoring rules. Any config accepted by
/// [`SearchConfig::validate`] only rescales scores: every computer win
/// still scores above a draw and every human win below it, so the move
/// picked is the same. Configs that break this are rejected, since they
/// would let the computer lose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Score of a computer win found at depth 0 (default: 10).
    /// A win at depth `d` scores `win_score - d`, a loss `d - win_score`.
    pub win_score: i32,

    /// Depth assigned to the boards produced by the computer's candidate
    /// moves (default: 1).
    pub root_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            win_score: 10,
            root_depth: 1,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom win score.
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }

    /// Create a new config with a custom root depth.
    pub fn with_root_depth(mut self, depth: u32) -> Self {
        self.root_depth = depth;
        self
    }

    /// Deepest ply a terminal board can sit at below a candidate move.
    fn deepest_terminal(&self) -> i64 {
        i64::from(self.root_depth) + CELL_COUNT as i64 - 1
    }

    /// Check that wins and losses at every reachable depth keep their
    /// sign.
    pub fn validate(&self) -> Result<()> {
        if i64::from(self.win_score) > self.deepest_terminal() {
            Ok(())
        } else {
            Err(Error::InvalidSearchConfig {
                win_score: self.win_score,
                root_depth: self.root_depth,
            })
        }
    }
}
