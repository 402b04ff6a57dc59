//! Python bindings for the tic-tac-toe engine.
//!
//! A ready-made seam for a presentation layer written in Python. Boards
//! use the string-grid convention: `""` for empty, `"X"`, `"O"`.
//!
//! # Quick Start
//!
//! ```python
//! import unbeatable_ttt as ttt
//!
//! session = ttt.GameSession()
//! session.play_human_turn(1, 1)
//! print(session.board)
//!
//! board = ttt.Board.from_rows([["", "", "X"], ["", "X", "O"], ["", "", ""]])
//! print(board.choose_computer_move().rows())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: crate::Error) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// unbeatable_ttt: tic-tac-toe against an unbeatable minimax computer.
///
/// This module provides:
/// - Board: immutable 3x3 board with move, evaluation and search helpers
/// - GameSession: turn-by-turn human versus computer match
#[pymodule]
fn unbeatable_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
