//! Exhaustive minimax solver for Tic-Tac-Toe
//!
//! This crate provides:
//! - Board model with turn resolution, legal actions and transitions
//! - Win, terminal and utility evaluation
//! - Minimax search without pruning or memoization
//! - Game records and minimax self-play
//! - A small command-line front end

pub mod cli;
pub mod error;
pub mod game;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{max_value, min_value, minimax};
pub use tictactoe::{
    Board, Cell, Outcome, Player, Position, actions, initial_state, player, result, terminal,
    utility, winner,
};
