//! Solve command - Report the minimax move and action values for a position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::OutputFormat, output},
    search::{Analysis, analyze},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct SolveArgs {
    /// Board to analyze as nine cells in row-major order (X, O, '.'), e.g. "XX.OO...."
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Execute the solve command
pub fn execute(args: SolveArgs) -> Result<()> {
    let board = super::parse_board(args.board.as_deref())?;
    let analysis = analyze(&board);

    match args.format {
        OutputFormat::Text => print_analysis(&board, &analysis),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }

    if let Some(path) = args.export {
        analysis
            .export_json(&path)
            .with_context(|| format!("failed to export analysis to {}", path.display()))?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

fn print_analysis(board: &crate::tictactoe::Board, analysis: &Analysis) {
    output::print_section("Minimax Analysis");
    output::print_board(board);
    println!();

    output::print_kv("Outcome", &output::describe_outcome(analysis.outcome));
    let Some(to_move) = analysis.to_move else {
        output::print_kv("Value", &analysis.value.to_string());
        println!("\n  (state is terminal)");
        return;
    };

    output::print_kv("To move", &to_move.to_string());
    output::print_kv(
        "Value",
        &format!(
            "{} ({} with best play)",
            analysis.value,
            output::describe_value(analysis.value)
        ),
    );
    if let Some(best) = analysis.best_action {
        output::print_kv("Best move", &best.to_string());
    }

    println!("\n  Action values (X's perspective):");
    for line in output::format_value_grid(&analysis.action_values).lines() {
        println!("  {line}");
    }
}
