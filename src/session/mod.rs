//! Whole-game state machine.
//!
//! A presentation layer drives a `GameSession`: it forwards the human's
//! clicks, asks for the computer's reply, and shows the verdict when the
//! game ends. The session owns the turn order so the human can never move
//! while the computer is to play.
//!
//! ```
//! use unbeatable_ttt::{CellId, GameSession, Outcome, TurnState};
//!
//! let mut session = GameSession::new();
//! let outcome = session.play_human_turn(CellId::new(1, 1)).unwrap();
//!
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(session.state(), TurnState::HumanToMove);
//! assert_eq!(session.board().count_empty_cells(), 7);
//! ```

mod config;
mod game;

pub use config::SessionConfig;
pub use game::{GameSession, TurnState, Verdict};
