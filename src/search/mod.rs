//! Game-tree search for the computer player.
//!
//! ## Overview
//!
//! - **Minimax**: scores a board assuming both sides play perfectly
//! - **Move selection**: scores every computer move and keeps the best,
//!   first in row-major order on ties
//! - **Statistics**: node counts and timings for diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use unbeatable_ttt::search::{Minimax, MoveSelector, SearchConfig};
//! use unbeatable_ttt::{Board, CellId, Token};
//!
//! let board = Board::empty().apply_move(CellId::new(0, 0), Token::X);
//!
//! let mut search = Minimax::new(SearchConfig::default()).unwrap();
//! let decision = search.select(&board).unwrap();
//!
//! println!("O plays {} (score {})", decision.cell, decision.score);
//! println!("{} boards scored", search.stats().nodes_visited);
//! ```

pub mod config;
pub mod minimax;
pub mod selector;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{minimax, Minimax};
pub use selector::{choose_computer_move, try_choose_computer_move, Decision, MoveSelector};
pub use stats::SearchStats;
