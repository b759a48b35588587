//! Self-play command - Play minimax against itself and show the game

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::OutputFormat, output},
    game::{Game, GameOutcome, self_play},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Play minimax against itself until the game ends")]
pub struct SelfPlayArgs {
    /// Starting board as nine cells in row-major order (defaults to empty)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Finished self-play game with every intermediate board
#[derive(Debug, Serialize)]
pub struct SelfPlayReport {
    pub game: Game,
    pub states: Vec<String>,
    pub utility: Option<i32>,
    #[serde(skip)]
    pub boards: Vec<Board>,
}

/// Play out the board named by `args`
pub fn run(args: &SelfPlayArgs) -> Result<SelfPlayReport> {
    let board = super::parse_board(args.board.as_deref())?;
    let game = self_play(board)?;
    let states = game.state_sequence()?;

    Ok(SelfPlayReport {
        states: states.iter().map(Board::encode).collect(),
        utility: game.outcome.map(GameOutcome::utility),
        game,
        boards: states,
    })
}

/// Execute the self-play command
pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let report = run(&args)?;

    match args.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_report(report: &SelfPlayReport) {
    let game = &report.game;
    output::print_section("Minimax Self-Play");
    output::print_board(&game.initial);

    for (i, (mv, state)) in game.moves.iter().zip(report.boards.iter().skip(1)).enumerate() {
        println!("\nMove {}: {} plays {}", i + 1, mv.player, mv.position);
        output::print_board(state);
    }

    let result = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    println!();
    output::print_kv("Result", &result);
}
