//! CLI infrastructure for the solver
//!
//! Non-interactive commands that analyze a single position or play minimax
//! against itself.

pub mod commands;
pub mod config;
pub mod output;
