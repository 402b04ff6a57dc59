//! Exhaustive minimax scoring.
//!
//! Scores are from the computer's point of view: positive favours `O`,
//! negative favours `X`. Terminal scores shrink with depth so that among
//! equal results the search prefers winning sooner and losing later.
//!
//! There is no pruning. The recursion depth is bounded by the number of
//! empty cells, so a plain recursive walk is enough.

use std::time::Instant;

use crate::core::{Board, Token};
use crate::error::Result;
use crate::rules::{child_states, evaluate, Outcome};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score `board` assuming optimal play by both sides, with the default
/// scoring rules.
///
/// `is_maximizing` tells whose move it is: `true` for the computer (`O`),
/// `false` for the human (`X`). `depth` is the number of plies already
/// played since the search root.
///
/// ```
/// use unbeatable_ttt::{minimax, Board};
///
/// let board = Board::from_rows([
///     ["X", "", ""],
///     ["O", "X", ""],
///     ["O", "", "X"],
/// ]);
/// assert_eq!(minimax(&board, true, 0), -10);
/// ```
#[must_use]
pub fn minimax(board: &Board, is_maximizing: bool, depth: u32) -> i32 {
    let mut stats = SearchStats::default();
    score_node(board, is_maximizing, depth, SearchConfig::default().win_score, &mut stats)
}

/// Minimax searcher.
///
/// Carries a configuration and accumulates statistics across calls. Use
/// the [`MoveSelector`](super::MoveSelector) implementation to pick the
/// computer's move.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    ///
    /// Fails with `Error::InvalidSearchConfig` if `config` does not pass
    /// [`SearchConfig::validate`].
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get accumulated statistics.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Clear accumulated statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Score `board` like [`minimax`], using this searcher's win score and
    /// recording statistics, time included.
    pub fn score(&mut self, board: &Board, is_maximizing: bool, depth: u32) -> i32 {
        let start = Instant::now();
        let score = score_node(board, is_maximizing, depth, self.config.win_score, &mut self.stats);
        self.stats.time_us += start.elapsed().as_micros() as u64;
        score
    }
}

/// Terminal score of a decided outcome, `None` while in progress.
fn terminal_score(outcome: Outcome, depth: u32, win_score: i32) -> Option<i32> {
    let depth = i32::try_from(depth).unwrap_or(i32::MAX);
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(Token::O) => Some(win_score.saturating_sub(depth)),
        Outcome::Won(Token::X) => Some(depth.saturating_sub(win_score)),
        Outcome::Drawn => Some(0),
    }
}

fn score_node(
    board: &Board,
    is_maximizing: bool,
    depth: u32,
    win_score: i32,
    stats: &mut SearchStats,
) -> i32 {
    let outcome = evaluate(board);

    if let Some(score) = terminal_score(outcome, depth, win_score) {
        stats.record_node(depth, true);
        return score;
    }
    stats.record_node(depth, false);

    let next = depth.saturating_add(1);
    if is_maximizing {
        child_states(board, Token::O)
            .iter()
            .fold(i32::MIN, |best, child| {
                best.max(score_node(child, false, next, win_score, stats))
            })
    } else {
        child_states(board, Token::X)
            .iter()
            .fold(i32::MAX, |best, child| {
                best.min(score_node(child, true, next, win_score, stats))
            })
    }
}
