//! # unbeatable-ttt
//!
//! A tic-tac-toe engine in which a human ("X") plays against a computer
//! ("O") that never loses.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: `Board` is a 9-cell `Copy` value. Every move
//!    produces a new board; an older board never changes underneath you.
//!
//! 2. **Exhaustive Search**: The computer scores every reachable position
//!    with plain minimax. No pruning, no move ordering, no heuristics.
//!
//! 3. **Deterministic Ties**: Candidates are enumerated in row-major order
//!    and only a strictly better score replaces the current pick.
//!
//! ## Modules
//!
//! - `core`: Tokens, cell identifiers, the board
//! - `rules`: Win/draw evaluation and move generation
//! - `search`: Minimax scoring and computer move selection
//! - `session`: Whole-game state machine for a presentation layer
//! - `error`: Crate error type
//!
//! ## Example
//!
//! ```
//! use unbeatable_ttt::{choose_computer_move, evaluate, Board, CellId, Outcome, Token};
//!
//! let board = Board::empty().apply_move(CellId::new(1, 1), Token::X);
//! let reply = choose_computer_move(&board);
//!
//! assert_eq!(reply.count_empty_cells(), 7);
//! assert_eq!(evaluate(&reply), Outcome::InProgress);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, CellId, Token};

pub use crate::error::{Error, Result};

pub use crate::rules::{child_moves, child_states, evaluate, winner, ChildStates, Outcome, WINNING_LINES};

pub use crate::search::{
    choose_computer_move, minimax, try_choose_computer_move, Decision, Minimax, MoveSelector,
    SearchConfig, SearchStats,
};

pub use crate::session::{GameSession, SessionConfig, TurnState, Verdict};
