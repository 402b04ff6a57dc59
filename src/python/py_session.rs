//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::session::{GameSession, SessionConfig, TurnState};

use super::py_core::{cell_id, outcome_label, PyBoard};
use super::to_py_err;

/// Python wrapper for GameSession.
///
/// The human plays X and always moves first.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - strange_game_after: Draw count after which a draw is announced
    ///   as a strange game (0 disables)
    #[new]
    #[pyo3(signature = (strange_game_after = 3))]
    fn new(strange_game_after: u32) -> Self {
        let config = SessionConfig::new().with_strange_game_after(strange_game_after);
        Self {
            inner: GameSession::with_selector(Default::default(), config),
        }
    }

    /// Current board.
    #[getter]
    fn board(&self) -> PyBoard {
        PyBoard(self.inner.board())
    }

    /// "human", "computer", "won" or "drawn".
    #[getter]
    fn state(&self) -> &'static str {
        match self.inner.state() {
            TurnState::HumanToMove => "human",
            TurnState::ComputerToMove => "computer",
            TurnState::Won(_) => "won",
            TurnState::Drawn => "drawn",
        }
    }

    /// Number of drawn games so far.
    #[getter]
    fn times_drawn(&self) -> u32 {
        self.inner.times_drawn()
    }

    /// Place X at (row, col). Returns the winner token, "DRAW", or None.
    fn human_move(&mut self, row: usize, col: usize) -> PyResult<Option<String>> {
        let outcome = self.inner.human_move(cell_id(row, col)?).map_err(to_py_err)?;
        Ok(outcome_label(outcome))
    }

    /// Let the computer move. Returns the (row, col) it played.
    fn computer_move(&mut self) -> PyResult<(usize, usize)> {
        let decision = self.inner.computer_move().map_err(to_py_err)?;
        Ok(decision.cell.into())
    }

    /// Human move plus the computer's reply.
    fn play_human_turn(&mut self, row: usize, col: usize) -> PyResult<Option<String>> {
        let outcome = self
            .inner
            .play_human_turn(cell_id(row, col)?)
            .map_err(to_py_err)?;
        Ok(outcome_label(outcome))
    }

    /// Start a new game.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// End-of-game message, or None while the game runs.
    fn verdict(&self) -> Option<String> {
        self.inner.verdict().map(|v| v.to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(state={}, times_drawn={})",
            self.state(),
            self.inner.times_drawn()
        )
    }
}
