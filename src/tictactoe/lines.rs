//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, Position};

const fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Winning lines on the 3x3 board, in scan order
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)], // rows
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)], // columns
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Player holding all three cells of `line`, if any
    pub fn line_owner(cells: &[[Cell; 3]; 3], line: &[Position; 3]) -> Option<Player> {
        let [a, b, c] = line.map(|p| cells[p.row][p.col]);
        if a == b && b == c { a.to_player() } else { None }
    }

    /// First completed line in scan order (rows, columns, diagonals)
    pub fn winning_line(cells: &[[Cell; 3]; 3]) -> Option<([Position; 3], Player)> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line).map(|player| (*line, player)))
    }

    /// Mark of the first completed line in scan order
    pub fn winner(cells: &[[Cell; 3]; 3]) -> Option<Player> {
        Self::winning_line(cells).map(|(_, player)| player)
    }
}
