//! Win and draw detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, CellId, Token};

/// The eight winning lines in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub const WINNING_LINES: [[CellId; 3]; 8] = [
    // Rows
    [CellId::new(0, 0), CellId::new(0, 1), CellId::new(0, 2)],
    [CellId::new(1, 0), CellId::new(1, 1), CellId::new(1, 2)],
    [CellId::new(2, 0), CellId::new(2, 1), CellId::new(2, 2)],
    // Columns
    [CellId::new(0, 0), CellId::new(1, 0), CellId::new(2, 0)],
    [CellId::new(0, 1), CellId::new(1, 1), CellId::new(2, 1)],
    [CellId::new(0, 2), CellId::new(1, 2), CellId::new(2, 2)],
    // Diagonals
    [CellId::new(0, 0), CellId::new(1, 1), CellId::new(2, 2)],
    [CellId::new(2, 0), CellId::new(1, 1), CellId::new(0, 2)],
];

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and moves remain.
    InProgress,
    /// A token owns a full line.
    Won(Token),
    /// No winner and no moves remain.
    Drawn,
}

impl Outcome {
    /// Check if the game is over (won or drawn).
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Get the winning token, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Token> {
        match self {
            Outcome::Won(token) => Some(token),
            _ => None,
        }
    }

    /// Check if `token` won.
    #[must_use]
    pub fn is_winner(self, token: Token) -> bool {
        self == Outcome::Won(token)
    }
}

/// Find the token owning a winning line.
///
/// Every line is scanned; a later winning line overwrites an earlier one.
/// Two different tokens both owning a line cannot arise in legal play and
/// trips a debug assertion.
#[must_use]
pub fn winner(board: &Board) -> Option<Token> {
    let mut found = None;

    for [a, b, c] in WINNING_LINES {
        let first = board.get(a);
        if let Some(token) = first.token() {
            if first == board.get(b) && first == board.get(c) {
                debug_assert!(
                    found.map_or(true, |prev| prev == token),
                    "both tokens own a winning line on board:\n{}",
                    board
                );
                found = Some(token);
            }
        }
    }

    found
}

/// Check if `token` owns at least one full line.
#[must_use]
pub fn owns_line(board: &Board, token: Token) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell).token() == Some(token)))
}

/// Classify a board.
///
/// ```
/// use unbeatable_ttt::{evaluate, Board, Outcome, Token};
///
/// let board = Board::from_rows([
///     ["O", "O", "O"],
///     ["X", "X", ""],
///     ["", "", ""],
/// ]);
/// assert_eq!(evaluate(&board), Outcome::Won(Token::O));
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    match winner(board) {
        Some(token) => Outcome::Won(token),
        None if board.count_empty_cells() == 0 => Outcome::Drawn,
        None => Outcome::InProgress,
    }
}
