//! Board bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, CellId, Token};
use crate::rules::{evaluate, Outcome};
use crate::search::{minimax, try_choose_computer_move};

use super::to_py_err;

/// Parse `"X"` / `"O"`.
pub(crate) fn parse_token(token: &str) -> PyResult<Token> {
    match token {
        "X" => Ok(Token::X),
        "O" => Ok(Token::O),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "token must be 'X' or 'O', got {:?}",
            other
        ))),
    }
}

/// Outcome in the string convention: winner token, `"DRAW"`, or `None`.
pub(crate) fn outcome_label(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(token) => Some(token.to_string()),
        Outcome::Drawn => Some("DRAW".to_string()),
    }
}

pub(crate) fn cell_id(row: usize, col: usize) -> PyResult<CellId> {
    CellId::try_new(row, col).map_err(to_py_err)
}

/// Python wrapper for Board.
///
/// Immutable: every move returns a new Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create an empty board.
    #[new]
    fn new() -> Self {
        Self(Board::empty())
    }

    /// Build a board from three rows of `""`, `"X"` or `"O"`.
    #[staticmethod]
    fn from_rows(rows: Vec<Vec<String>>) -> PyResult<Self> {
        if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
            return Err(PyErr::new::<PyValueError, _>("board must be 3 rows of 3 cells"));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    board = board.apply_move(CellId::new(r, c), parse_token(value)?);
                }
            }
        }
        Ok(Self(board))
    }

    /// Parse the compact text form, e.g. `"X.. .O. ..."`.
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        text.parse().map(Self).map_err(to_py_err)
    }

    /// The board as three rows of `""`, `"X"` or `"O"`.
    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.token().map(|t| t.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Check if the cell is empty.
    fn is_valid_move(&self, row: usize, col: usize) -> PyResult<bool> {
        Ok(self.0.is_valid_move(cell_id(row, col)?))
    }

    /// Return a new board with `token` placed at (row, col).
    fn apply_move(&self, row: usize, col: usize, token: &str) -> PyResult<Self> {
        Ok(Self(self.0.apply_move(cell_id(row, col)?, parse_token(token)?)))
    }

    /// Number of empty cells.
    fn count_empty_cells(&self) -> usize {
        self.0.count_empty_cells()
    }

    /// Winner token, `"DRAW"`, or None while in progress.
    fn evaluate(&self) -> Option<String> {
        outcome_label(evaluate(&self.0))
    }

    /// Minimax score of this board.
    #[pyo3(signature = (is_maximizing, depth = 0))]
    fn minimax(&self, is_maximizing: bool, depth: u32) -> i32 {
        minimax(&self.0, is_maximizing, depth)
    }

    /// Board after the computer's best move.
    fn choose_computer_move(&self) -> PyResult<Self> {
        try_choose_computer_move(&self.0).map(Self).map_err(to_py_err)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Board('{}')", self.0.to_string().replace('\n', "/"))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
