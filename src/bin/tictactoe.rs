//! Tic-Tac-Toe minimax solver CLI
//!
//! Subcommands:
//! - `solve`: optimal move and per-action values for one position
//! - `self-play`: minimax against itself from a position to the end
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=tictactoe_minimax=debug`) for search logs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    Solve(tictactoe_minimax::cli::commands::solve::SolveArgs),

    /// Play minimax against itself until the game ends
    SelfPlay(tictactoe_minimax::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => tictactoe_minimax::cli::commands::solve::execute(args),
        Commands::SelfPlay(args) => tictactoe_minimax::cli::commands::self_play::execute(args),
    }
}
