//! Common test utilities for the solver test suite.

use std::collections::HashSet;

use tictactoe_minimax::tictactoe::{Board, initial_state};

/// Every board reachable from the empty board by legal play, stopping at terminal boards.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.terminal() {
            continue;
        }
        for action in board.actions() {
            stack.push(board.result(action).expect("enumerated action should be legal"));
        }
    }

    boards
}

/// Parse a board literal, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}
