//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A cell address, doubling as a move candidate.
///
/// Ordering is lexicographic on `(row, col)`, so sorted collections of
/// positions iterate in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Row-major index (0-8) of an in-bounds position
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// All nine positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 board, stored row-major.
///
/// Boards are values: every transition returns a fresh `Board` and leaves the
/// receiver untouched, so the search can hold many sibling boards at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Wrap a grid of cells without checking the piece-count invariant.
    ///
    /// Use [`Board::validate`] before handing such a board to [`Board::player`].
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string of nine cells in row-major order.
    ///
    /// Whitespace is ignored, so both `"XX.OO...."` and `"XX. OO. ..."` parse.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X must equal O or lead by one)
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_minimax::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("XX. OO. ...").unwrap();
    /// assert_eq!(board.player(), Player::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (position, &c) in Position::all().zip(chars.iter()) {
            board.cells[position.row][position.col] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: position.index(),
                    context: s.to_string(),
                })?;
        }

        board.validate()?;
        Ok(board)
    }

    /// Check that X leads O by zero or one piece.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] otherwise.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.piece_counts();
        if count.x == count.o || count.x == count.o + 1 {
            Ok(())
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Count pieces on the board.
    pub fn piece_counts(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.piece_counts();
        count.x + count.o
    }

    /// Get the cell at a position, or `None` when the position is off the board
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Player who has the next turn.
    ///
    /// X moves whenever the piece counts are equal, O otherwise. The board is
    /// expected to satisfy the piece-count invariant (see [`Board::validate`]);
    /// debug builds assert it, release builds answer from the counts alone.
    pub fn player(&self) -> Player {
        let count = self.piece_counts();
        debug_assert!(
            count.x == count.o || count.x == count.o + 1,
            "player() called on a board with invalid piece counts (X={}, O={})",
            count.x,
            count.o
        );
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty positions, iterated in row-major order
    pub fn actions(&self) -> BTreeSet<Position> {
        Position::all()
            .filter(|&position| self.get(position) == Some(Cell::Empty))
            .collect()
    }

    /// Place the current player's mark and return the resulting board.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::OutOfBounds`] if either coordinate is outside `[0, 3)`
    /// - [`crate::Error::IllegalMove`] if the cell is already occupied
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Position) -> Result<Board, crate::Error> {
        let Position { row, col } = action;
        match self.get(action) {
            None => Err(crate::Error::OutOfBounds { row, col }),
            Some(Cell::X | Cell::O) => Err(crate::Error::IllegalMove { row, col }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[row][col] = self.player().to_cell();
                Ok(next)
            }
        }
    }

    /// Compact nine-character representation, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
