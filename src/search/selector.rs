//! Computer move selection.
//!
//! Every candidate move for `O` is scored with minimax, the human moving
//! next. The first candidate in row-major order with the strictly highest
//! score is kept, so ties always resolve toward the top-left.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::core::{Board, CellId, Token};
use crate::error::{Error, Result};
use crate::rules::child_moves;

use super::minimax::Minimax;

/// A chosen computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell the computer plays.
    pub cell: CellId,
    /// Board after the move.
    pub board: Board,
    /// Minimax score of `board`.
    pub score: i32,
}

/// Policy for choosing the computer's move.
///
/// `GameSession` is generic over this trait; `Minimax` is the standard
/// implementation.
pub trait MoveSelector {
    /// Choose a move for `O` on `board`.
    ///
    /// Returns `Error::NoMovesAvailable` if the board has no empty cells.
    fn select(&mut self, board: &Board) -> Result<Decision>;
}

impl MoveSelector for Minimax {
    #[instrument(level = "debug", skip(self, board), fields(empty = board.count_empty_cells()))]
    fn select(&mut self, board: &Board) -> Result<Decision> {
        let start = Instant::now();
        let root_depth = self.config().root_depth;

        let mut best: Option<Decision> = None;
        for (cell, candidate) in child_moves(board, Token::O) {
            let score = self.score(&candidate, false, root_depth);
            trace!(%cell, score, "scored candidate");

            if best.map_or(true, |b| score > b.score) {
                best = Some(Decision {
                    cell,
                    board: candidate,
                    score,
                });
            }
        }

        let elapsed = start.elapsed().as_micros() as u64;
        let decision = best.ok_or(Error::NoMovesAvailable)?;
        self.stats_mut().decisions += 1;

        debug!(cell = %decision.cell, score = decision.score, elapsed_us = elapsed, "computer move chosen");
        Ok(decision)
    }
}

/// Choose the computer's move and return the resulting board.
///
/// # Panics
///
/// Panics if `board` has no empty cells. Callers must only ask for a move
/// while the game is still running; use [`try_choose_computer_move`] to
/// get an error instead.
///
/// ```
/// use unbeatable_ttt::{choose_computer_move, Board, CellId, Token};
///
/// // X threatens the anti-diagonal; O must block at (2, 0).
/// let board = Board::from_rows([
///     ["", "", "X"],
///     ["", "X", "O"],
///     ["", "", ""],
/// ]);
/// let next = choose_computer_move(&board);
/// assert_eq!(next.get(CellId::new(2, 0)).token(), Some(Token::O));
/// ```
#[must_use]
pub fn choose_computer_move(board: &Board) -> Board {
    match try_choose_computer_move(board) {
        Ok(next) => next,
        Err(err) => panic!("choose_computer_move: {}", err),
    }
}

/// Choose the computer's move, returning `Error::NoMovesAvailable` on a
/// full board.
pub fn try_choose_computer_move(board: &Board) -> Result<Board> {
    Minimax::default().select(board).map(|decision| decision.board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{evaluate, Outcome};
    use crate::search::SearchConfig;

    #[test]
    fn test_blocks_diagonal_threat() {
        let board = Board::from_rows([["", "", "X"], ["", "X", "O"], ["", "", ""]]);
        let next = choose_computer_move(&board);

        assert_eq!(next.get(CellId::new(2, 0)).token(), Some(Token::O));
        assert_eq!(next.count_empty_cells(), board.count_empty_cells() - 1);
    }

    #[test]
    fn test_fills_last_cell() {
        let board = Board::from_rows([["X", "O", "X"], ["X", "O", "O"], ["O", "X", ""]]);
        let next = choose_computer_move(&board);

        assert_eq!(next, board.apply_move(CellId::new(2, 2), Token::O));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can win at (0, 2) or block X's row at (1, 2); winning scores higher
        let board = Board::from_rows([["O", "O", ""], ["X", "X", ""], ["", "", "X"]]);
        let decision = Minimax::default().select(&board).unwrap();

        assert_eq!(decision.cell, CellId::new(0, 2));
        assert_eq!(decision.score, 9);
        assert_eq!(evaluate(&decision.board), Outcome::Won(Token::O));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // Corner replies to a center opening draw, edge replies lose.
        let board = Board::empty().apply_move(CellId::new(1, 1), Token::X);
        let decision = Minimax::default().select(&board).unwrap();

        assert_eq!(decision.cell, CellId::new(0, 0));
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn test_full_board_errors() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]);
        assert_eq!(try_choose_computer_move(&board), Err(Error::NoMovesAvailable));
    }

    #[test]
    #[should_panic(expected = "no empty cells left to move into")]
    fn test_full_board_panics() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]);
        let _ = choose_computer_move(&board);
    }

    #[test]
    fn test_select_records_stats() {
        let board = Board::from_rows([["X", "", ""], ["", "O", ""], ["", "", "X"]]);
        let mut search = Minimax::new(SearchConfig::default()).unwrap();

        search.select(&board).unwrap();
        search.select(&board).unwrap();

        assert_eq!(search.stats().decisions, 2);
        assert!(search.stats().nodes_visited > 0);

        search.reset_stats();
        assert_eq!(search.stats().decisions, 0);
    }

    #[test]
    fn test_root_depth_shifts_scores_not_choice() {
        let board = Board::from_rows([["O", "O", ""], ["X", "X", ""], ["", "", "X"]]);
        let standard = Minimax::default().select(&board).unwrap();
        let shifted = Minimax::new(SearchConfig::default().with_root_depth(0))
            .unwrap()
            .select(&board)
            .unwrap();

        assert_eq!(standard.cell, shifted.cell);
        assert_eq!(shifted.score, standard.score + 1);
    }
}
