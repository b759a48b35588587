//! CLI subcommands

use anyhow::{Context, Result};

use crate::tictactoe::{Board, initial_state};

pub mod self_play;
pub mod solve;

/// Parse the optional `--board` argument, defaulting to the empty board
pub fn parse_board(board: Option<&str>) -> Result<Board> {
    match board {
        Some(s) => Board::from_string(s).with_context(|| format!("failed to parse board '{s}'")),
        None => Ok(initial_state()),
    }
}
