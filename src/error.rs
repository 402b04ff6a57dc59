//! Error types for the engine.
//!
//! The pure board and search operations follow a caller-validates
//! contract and never return errors. The fallible `try_*` variants and
//! the game session report contract violations through [`Error`].

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is out of range (rows and columns must be 0-2)")]
    CellOutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("no empty cells left to move into")]
    NoMovesAvailable,

    #[error("game already over")]
    GameOver,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("both X and O own a winning line")]
    ConflictingWinners,

    #[error("search config would let deep wins score at or below a draw (win_score {win_score}, root_depth {root_depth})")]
    InvalidSearchConfig { win_score: i32, root_depth: u32 },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
