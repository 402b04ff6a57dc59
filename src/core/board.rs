//! The 3×3 board.
//!
//! `Board` is an immutable value: `apply_move` returns a new board and
//! leaves the original untouched. It is 9 bytes and `Copy`, so search
//! creates child boards without any sharing or allocation.
//!
//! ## Text form
//!
//! `Display` renders three lines of `X`, `O` and `.`; `FromStr` accepts
//! the same nine characters with optional whitespace, `/` or `|`
//! separators. A board where both tokens own a line is rejected.
//! Serde uses the text form, so deserialized boards are checked too.
//!
//! ```
//! use unbeatable_ttt::{Board, CellId, Token};
//!
//! let board: Board = "X.. / .O. / ...".parse().unwrap();
//! assert_eq!(board.get(CellId::new(0, 0)).token(), Some(Token::X));
//! assert_eq!(board.count_empty_cells(), 7);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{CellId, CELL_COUNT, SIZE};
use super::token::{Cell, Token};
use crate::error::{Error, Result};
use crate::rules::owns_line;

/// A 3×3 tic-tac-toe grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a board with all nine cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from string rows: `""` for empty, `"X"` or `"O"`.
    ///
    /// # Panics
    ///
    /// Panics on any other string. Intended for fixtures.
    ///
    /// ```
    /// use unbeatable_ttt::{Board, CellId, Token};
    ///
    /// let board = Board::from_rows([
    ///     ["O", "O", "O"],
    ///     ["X", "X", ""],
    ///     ["", "", ""],
    /// ]);
    /// assert_eq!(board.get(CellId::new(1, 1)).token(), Some(Token::X));
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[&str; SIZE]; SIZE]) -> Self {
        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                grid[r][c] = match *value {
                    "" => Cell::Empty,
                    "X" => Cell::Occupied(Token::X),
                    "O" => Cell::Occupied(Token::O),
                    other => panic!("invalid cell value {:?} at ({}, {})", other, r, c),
                };
            }
        }
        Self { grid }
    }

    /// Get the contents of a cell.
    #[must_use]
    pub const fn get(&self, cell: CellId) -> Cell {
        self.grid[cell.row()][cell.col()]
    }

    /// Check if a move into `cell` is legal (the cell is empty).
    #[must_use]
    pub const fn is_valid_move(&self, cell: CellId) -> bool {
        self.get(cell).is_empty()
    }

    /// Return a new board with `token` placed at `cell`.
    ///
    /// Does not check legality: an occupied cell is overwritten. Check
    /// `is_valid_move` first when legality matters, or use
    /// `try_apply_move`.
    #[must_use]
    pub fn apply_move(&self, cell: CellId, token: Token) -> Board {
        let mut next = *self;
        next.grid[cell.row()][cell.col()] = Cell::Occupied(token);
        next
    }

    /// Return a new board with `token` placed at `cell`, rejecting
    /// occupied cells.
    pub fn try_apply_move(&self, cell: CellId, token: Token) -> Result<Board> {
        if self.is_valid_move(cell) {
            Ok(self.apply_move(cell, token))
        } else {
            Err(Error::CellOccupied {
                row: cell.row(),
                col: cell.col(),
            })
        }
    }

    /// Number of empty cells, i.e. moves remaining.
    #[must_use]
    pub fn count_empty_cells(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Check if no empty cells remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty_cells() == 0
    }

    /// Iterate over `(CellId, Cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, Cell)> + '_ {
        CellId::all().map(move |id| (id, self.get(id)))
    }

    /// Iterate over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(id, _)| id)
    }

    /// Count cells holding `token`.
    #[must_use]
    pub fn count(&self, token: Token) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(token))
            .count()
    }

    /// Rows of the grid, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
            });
        }

        let mut board = Board::empty();
        for (position, &character) in chars.iter().enumerate() {
            let cell = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                position,
            })?;
            let id = CellId::from_index(position);
            board.grid[id.row()][id.col()] = cell;
        }

        if owns_line(&board, Token::X) && owns_line(&board, Token::O) {
            return Err(Error::ConflictingWinners);
        }

        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}
