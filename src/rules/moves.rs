//! Move generation.
//!
//! Children are produced eagerly in row-major order. The order is part of
//! the contract: the move selector keeps the first of equally scored
//! candidates.

use smallvec::SmallVec;

use crate::core::{Board, CellId, Token};

/// Boards reachable in one move. Never more than nine, so they stay
/// inline.
pub type ChildStates = SmallVec<[Board; 9]>;

/// Every board obtained by placing `token` in one empty cell, in
/// row-major order.
///
/// ```
/// use unbeatable_ttt::{child_states, Board, Token};
///
/// let board: Board = "OOX XXO .X.".parse().unwrap();
/// let children = child_states(&board, Token::O);
///
/// assert_eq!(children.len(), 2);
/// assert_eq!(children[0], "OOX XXO OX.".parse::<Board>().unwrap());
/// assert_eq!(children[1], "OOX XXO .XO".parse::<Board>().unwrap());
/// ```
#[must_use]
pub fn child_states(board: &Board, token: Token) -> ChildStates {
    board
        .empty_cells()
        .map(|cell| board.apply_move(cell, token))
        .collect()
}

/// Like [`child_states`], paired with the cell each child was produced by.
#[must_use]
pub fn child_moves(board: &Board, token: Token) -> SmallVec<[(CellId, Board); 9]> {
    board
        .empty_cells()
        .map(|cell| (cell, board.apply_move(cell, token)))
        .collect()
}
