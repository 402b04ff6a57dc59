//! Player tokens and cell contents.
//!
//! ## Token
//!
//! `X` is always the human, `O` is always the computer.
//!
//! ## Cell
//!
//! A cell is either empty or holds one token.

use serde::{Deserialize, Serialize};

/// A marker placed on the board by one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// The human player. Minimizes the score.
    X,
    /// The computer player. Maximizes the score.
    O,
}

impl Token {
    /// Token played by the human.
    pub const HUMAN: Token = Token::X;

    /// Token played by the computer.
    pub const COMPUTER: Token = Token::O;

    /// Get the other token.
    ///
    /// ```
    /// use unbeatable_ttt::Token;
    ///
    /// assert_eq!(Token::X.opponent(), Token::O);
    /// assert_eq!(Token::O.opponent(), Token::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    /// Character used in text renderings.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No token placed yet.
    #[default]
    Empty,
    /// Holds a player's token.
    Occupied(Token),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the token in this cell, if any.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }

    /// Character used in text renderings (`.` for empty).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(token) => token.as_char(),
        }
    }

    /// Parse a cell character.
    ///
    /// Accepts `X`/`O` in either case and `.`, `_`, `-` for empty.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Token::X)),
            'O' | 'o' => Some(Cell::Occupied(Token::O)),
            _ => None,
        }
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        Cell::Occupied(token)
    }
}
