//! Exhaustive minimax search
//!
//! X maximizes and O minimizes the utility of the terminal board. The search
//! always runs to terminal states: no pruning, no memoization, no cutoffs.
//! Actions are visited in row-major order, and when several actions share
//! the best value the first one visited is chosen.

use std::{fs::File, path::Path};

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::tictactoe::{Board, Outcome, Player, Position};

/// Successor of `board` for an action taken from `board.actions()`.
fn successor(board: &Board, action: Position) -> Board {
    board
        .result(action)
        .expect("legal move generation should not fail")
}

/// Best guaranteed utility for X, assuming X is to move on `board`.
pub fn max_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }

    board
        .actions()
        .into_iter()
        .map(|action| min_value(&successor(board, action)))
        .fold(i32::MIN, i32::max)
}

/// Best guaranteed utility for O (lowest for X), assuming O is to move on `board`.
pub fn min_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }

    board
        .actions()
        .into_iter()
        .map(|action| max_value(&successor(board, action)))
        .fold(i32::MAX, i32::min)
}

/// Minimax value of `board` with the side to move playing optimally.
pub fn value(board: &Board) -> i32 {
    match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Minimax value of the board reached by one action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionValue {
    pub position: Position,
    pub value: i32,
}

/// Value every legal action in row-major order.
///
/// Returns an empty list for terminal boards.
pub fn evaluate_actions(board: &Board) -> Vec<ActionValue> {
    if board.terminal() {
        return Vec::new();
    }

    let to_move = board.player();
    board
        .actions()
        .into_iter()
        .map(|position| {
            let next = successor(board, position);
            let value = match to_move {
                Player::X => min_value(&next),
                Player::O => max_value(&next),
            };
            trace!(%position, value, "evaluated action");
            ActionValue { position, value }
        })
        .collect()
}

/// Pick the first strictly-best entry for `to_move`.
fn select_best(to_move: Player, evaluations: &[ActionValue]) -> Option<ActionValue> {
    let mut best_value = match to_move {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best = None;

    for &candidate in evaluations {
        let improves = match to_move {
            Player::X => candidate.value > best_value,
            Player::O => candidate.value < best_value,
        };
        if improves {
            best_value = candidate.value;
            best = Some(candidate);
        }
    }

    best
}

/// Returns the optimal action for the current player, or `None` once the game is over.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{search::minimax, tictactoe::{Board, Position}};
///
/// let board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(minimax(&board), Some(Position::new(0, 2)));
/// ```
#[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
pub fn minimax(board: &Board) -> Option<Position> {
    if board.terminal() {
        return None;
    }

    let to_move = board.player();
    let best = select_best(to_move, &evaluate_actions(board))?;
    debug!(player = %to_move, position = %best.position, value = best.value, "selected action");
    Some(best.position)
}

/// Full search report for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub board: String,
    pub to_move: Option<Player>,
    pub outcome: Outcome,
    pub value: i32,
    pub best_action: Option<Position>,
    pub action_values: Vec<ActionValue>,
}

impl Analysis {
    /// Write the analysis to `path` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be created and
    /// [`crate::Error::Serialization`] if writing the JSON fails.
    pub fn export_json(&self, path: &Path) -> crate::Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Search `board` and collect every action's value alongside the chosen move.
///
/// `to_move` is `None` on terminal boards, where `value` is the board's utility.
#[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
pub fn analyze(board: &Board) -> Analysis {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Analysis {
            board: board.encode(),
            to_move: None,
            outcome,
            value: board.utility(),
            best_action: None,
            action_values: Vec::new(),
        };
    }

    let to_move = board.player();
    let action_values = evaluate_actions(board);
    let best = select_best(to_move, &action_values);
    debug!(player = %to_move, best = ?best, "analysis complete");

    Analysis {
        board: board.encode(),
        to_move: Some(to_move),
        outcome,
        value: best.map_or_else(|| board.utility(), |b| b.value),
        best_action: best.map(|b| b.position),
        action_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(minimax(&board("XX. OO. ...")), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move; both sides threaten, O completes its own row first
        assert_eq!(minimax(&board("XX. OO. X..")), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // O to move; X threatens (0, 2)
        assert_eq!(minimax(&board("XX. .O. ...")), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(minimax(&board("XXX OO. ...")), None);
        assert_eq!(minimax(&board("XOX XOO OXX")), None);
    }

    #[test]
    fn test_value_functions_on_terminal_boards() {
        let won = board("XXX OO. ...");
        assert_eq!(max_value(&won), 1);
        assert_eq!(min_value(&won), 1);

        let drawn = board("XOX XOO OXX");
        assert_eq!(max_value(&drawn), 0);
        assert_eq!(min_value(&drawn), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(value(&Board::new()), 0);
    }

    #[test]
    fn test_tie_break_prefers_first_action() {
        // Every opening move draws, so the first in row-major order wins the tie
        let evaluations = evaluate_actions(&Board::new());
        assert_eq!(evaluations.len(), 9);
        assert!(evaluations.iter().all(|e| e.value == 0));
        assert_eq!(minimax(&Board::new()), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_select_best_is_strict() {
        let evaluations = [
            ActionValue {
                position: Position::new(0, 1),
                value: 0,
            },
            ActionValue {
                position: Position::new(1, 0),
                value: 1,
            },
            ActionValue {
                position: Position::new(2, 2),
                value: 1,
            },
        ];

        let best_x = select_best(Player::X, &evaluations).unwrap();
        assert_eq!(best_x.position, Position::new(1, 0));

        let best_o = select_best(Player::O, &evaluations).unwrap();
        assert_eq!(best_o.position, Position::new(0, 1));

        assert_eq!(select_best(Player::X, &[]), None);
    }

    #[test]
    fn test_analyze_terminal_board() {
        let analysis = analyze(&board("XXX OO. ..."));
        assert_eq!(analysis.to_move, None);
        assert_eq!(analysis.outcome, Outcome::Win(Player::X));
        assert_eq!(analysis.value, 1);
        assert_eq!(analysis.best_action, None);
        assert!(analysis.action_values.is_empty());
    }

    #[test]
    fn test_analyze_agrees_with_minimax() {
        let b = board("X.. .O. ..X");
        let analysis = analyze(&b);
        assert_eq!(analysis.to_move, Some(Player::O));
        assert_eq!(analysis.best_action, minimax(&b));
        assert_eq!(analysis.value, value(&b));
        assert_eq!(analysis.action_values.len(), 6);
    }
}
