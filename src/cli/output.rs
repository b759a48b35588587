//! Output formatting for CLI

use crate::{
    search::ActionValue,
    tictactoe::{Board, Outcome},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:14} {}", format!("{}:", key), value);
}

/// Print a board indented under the current section
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

/// Describe an outcome in words
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} wins"),
        Outcome::Draw => "draw".to_string(),
        Outcome::InProgress => "in progress".to_string(),
    }
}

/// Describe a minimax value from X's perspective
pub fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Render per-action values as a 3x3 grid, `.` for occupied cells
pub fn format_value_grid(action_values: &[ActionValue]) -> String {
    let mut rows = vec![vec!["  .".to_string(); 3]; 3];
    for entry in action_values {
        rows[entry.position.row][entry.position.col] = format!("{:>3}", entry.value);
    }
    rows.iter()
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}
