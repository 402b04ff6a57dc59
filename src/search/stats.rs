//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected while scoring boards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root decisions made (`select` calls that produced a move).
    /// Direct `score` calls count nodes and time but no decision.
    pub decisions: u32,

    /// Boards scored, terminal or not.
    pub nodes_visited: u64,

    /// Boards that ended the recursion (won or drawn).
    pub terminal_nodes: u64,

    /// Deepest ply reached.
    pub max_depth: u32,

    /// Total time spent scoring boards through `Minimax::score`, which
    /// `select` calls once per candidate (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one scored board.
    pub(crate) fn record_node(&mut self, depth: u32, terminal: bool) {
        self.nodes_visited += 1;
        if terminal {
            self.terminal_nodes += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes scored per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate average nodes scored per decision.
    #[must_use]
    pub fn avg_nodes_per_decision(&self) -> f64 {
        if self.decisions == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.decisions as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.decisions, 0);
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn test_record_node() {
        let mut stats = SearchStats::new();
        stats.record_node(1, false);
        stats.record_node(4, true);
        stats.record_node(2, true);

        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.terminal_nodes, 2);
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 1000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.decisions = 3;
        stats.nodes_visited = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
        assert_eq!(stats.avg_nodes_per_decision(), 0.0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes_visited, deserialized.nodes_visited);
    }
}
