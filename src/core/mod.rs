//! Core board types: tokens, cell identifiers, the board itself.
//!
//! Everything here is a small `Copy` value. Search clones boards freely.

pub mod board;
pub mod cell;
pub mod token;

pub use board::Board;
pub use cell::CellId;
pub use token::{Cell, Token};
