//! Tic-tac-toe rules.
//!
//! - `outcome`: classify a board as in progress, won, or drawn
//! - `moves`: enumerate the boards reachable in one move
//!
//! Search calls into these functions and never inspects lines or cells
//! directly.

pub mod moves;
pub mod outcome;

pub use moves::{child_moves, child_states, ChildStates};
pub use outcome::{evaluate, owns_line, winner, Outcome, WINNING_LINES};
