//! Game records and minimax self-play

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    search::minimax,
    tictactoe::{Board, Outcome, Player, Position},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Utility of the final board from X's perspective
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }

    fn from_board(board: &Board) -> Option<Self> {
        match board.outcome() {
            Outcome::Win(player) => Some(GameOutcome::Win(player)),
            Outcome::Draw => Some(GameOutcome::Draw),
            Outcome::InProgress => None,
        }
    }
}

/// A game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            initial: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Start a game from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts of `board` are invalid.
    pub fn from_board(board: Board) -> Result<Self, crate::Error> {
        board.validate()?;
        Ok(Game {
            initial: board,
            moves: Vec::new(),
            outcome: GameOutcome::from_board(&board),
        })
    }

    /// Play a move for whoever is to move and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, and
    /// [`crate::Error::OutOfBounds`] or [`crate::Error::IllegalMove`] if
    /// `position` is not a legal move. Nothing is recorded on error.
    pub fn play(&mut self, position: Position) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(position)?;

        self.moves.push(Move {
            position,
            player: current.player(),
        });
        self.outcome = GameOutcome::from_board(&next);

        Ok(next)
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was played on. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for m in self.moves.iter().take(end_index) {
            state = state.result(m.position)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history is corrupted.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial board
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history is corrupted.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);

        for m in &self.moves {
            state = state.result(m.position)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Play minimax against itself from `board` until the game ends.
///
/// # Errors
///
/// Returns error if the piece counts of `board` are invalid.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{game::{GameOutcome, self_play}, tictactoe::initial_state};
///
/// let game = self_play(initial_state()).unwrap();
/// assert_eq!(game.outcome, Some(GameOutcome::Draw));
/// ```
#[instrument(level = "debug", skip_all, fields(board = %board.encode()))]
pub fn self_play(board: Board) -> Result<Game, crate::Error> {
    let mut game = Game::from_board(board)?;
    let mut state = board;

    while let Some(position) = minimax(&state) {
        debug!(player = %state.player(), %position, "self-play move");
        state = game.play(position)?;
    }

    info!(moves = game.moves.len(), outcome = ?game.outcome, "self-play finished");
    Ok(game)
}
