//! Terminal detection and outcome scoring

use serde::{Deserialize, Serialize};

use super::{Board, Cell, Player, lines::LineAnalyzer};

/// Status of a board at any point in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl Board {
    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the board is full
    pub fn is_full(&self) -> bool {
        !self.cells.iter().flatten().any(|&c| c == Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Game value from X's perspective: 1 for an X win, -1 for an O win, 0 otherwise.
    ///
    /// Total over all boards; a board without a winner scores 0 whether or not
    /// it is full.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        assert!(!board.terminal());
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_o_win() {
        // O wins on middle column
        let board = Board::from_string("XOX .OX .O.").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
        assert_eq!(board.outcome(), Outcome::Win(Player::O));
        assert!(board.outcome().is_terminal());
    }

    #[test]
    fn test_draw() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert!(board.terminal());
        assert_eq!(board.outcome(), Outcome::Draw);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_win_on_full_board_is_a_win() {
        // X completes the main diagonal with the last move
        let board = Board::from_string("XOO OXX XOX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
        assert_eq!(board.utility(), 1);
    }
}
