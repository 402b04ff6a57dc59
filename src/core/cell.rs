//! Cell identifiers.
//!
//! A `CellId` addresses one cell as a `(row, col)` pair, both in `0..3`.
//! Row-major index: `row * 3 + col`.
//!
//! ```
//! use unbeatable_ttt::CellId;
//!
//! let center = CellId::new(1, 1);
//! assert_eq!(center.index(), 4);
//! assert_eq!(CellId::from_index(4), center);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Identifier for one board cell.
///
/// Serialized as a `[row, col]` pair; deserialization applies the same
/// range check as [`CellId::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct CellId {
    row: u8,
    col: u8,
}

impl CellId {
    /// Create a cell identifier.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "cell coordinates must be in 0..3");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Create a cell identifier, rejecting out-of-range coordinates.
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row < SIZE && col < SIZE {
            Ok(Self::new(row, col))
        } else {
            Err(Error::CellOutOfRange { row, col })
        }
    }

    /// Create from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index must be in 0..9");
        Self::new(index / SIZE, index % SIZE)
    }

    /// Row (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0 = left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    /// Iterate over all nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..CELL_COUNT).map(CellId::from_index)
    }
}

impl From<CellId> for (usize, usize) {
    fn from(cell: CellId) -> Self {
        (cell.row(), cell.col())
    }
}

impl TryFrom<(usize, usize)> for CellId {
    type Error = Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        CellId::try_new(row, col)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
