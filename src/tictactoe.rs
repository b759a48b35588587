//! Tic-Tac-Toe game rules
//!
//! The free functions here are the state-transition surface the search is
//! written against; each one forwards to the matching [`Board`] method.

pub mod board;
pub mod lines;
pub mod outcome;

use std::collections::BTreeSet;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, PieceCount, Player, Position};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::Outcome;

/// Returns the starting (empty) board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who has the next turn on `board`.
pub fn player(board: &Board) -> Player {
    board.player()
}

/// Returns every empty position on `board`, in row-major order.
pub fn actions(board: &Board) -> BTreeSet<Position> {
    board.actions()
}

/// Returns the board that results from the current player marking `action`.
///
/// # Errors
///
/// Fails with [`crate::Error::OutOfBounds`] or [`crate::Error::IllegalMove`].
pub fn result(board: &Board, action: Position) -> crate::Result<Board> {
    board.result(action)
}

/// Returns the winner of the game, if there is one.
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// Returns true if the game is over.
pub fn terminal(board: &Board) -> bool {
    board.terminal()
}

/// Returns 1 if X has won, -1 if O has won, 0 otherwise.
pub fn utility(board: &Board) -> i32 {
    board.utility()
}
