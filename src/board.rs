//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineScores;

/// Board side length for the standard game.
///
/// Winner detection generalizes to other sizes, but the rest of the crate
/// assumes the classic 3x3 grid.
pub const SIZE: usize = 3;

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
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A coordinate pair identifying a cell, zero-indexed from the top-left.
///
/// An action is legal on a given board exactly when the addressed cell is
/// empty. `Ord` follows row-major order, which is also the order the search
/// uses for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Board state: a square grid of cells.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
/// The player to move is not stored; it is derived from occupancy, so the
/// cells alone determine the full game state under alternating play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count()
    }

    /// Player to move, derived from occupancy.
    ///
    /// X moves on even mark counts, O on odd. Always returns a definite
    /// player, even on a full board; check [`is_terminal`](Self::is_terminal)
    /// before treating the result as a mover.
    pub fn player(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Get cell at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid. Use [`apply`](Self::apply)
    /// for fallible, bounds-checked access when coordinates are untrusted.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// All legal actions, in row-major order.
    ///
    /// Empty on a full board. The enumeration order matters: the search keeps
    /// the first action achieving the best value, so row-major order here is
    /// what makes tie-breaking lexicographic in (row, col).
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Cell::Empty {
                    actions.push(Action { row, col });
                }
            }
        }
        actions
    }

    /// Apply an action and return the successor board.
    ///
    /// The mark placed is that of [`player`](Self::player) on `self`. The
    /// input board is never mutated; search branches sharing an ancestor
    /// state rely on this.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the action addresses a cell
    /// outside the grid, and [`crate::Error::InvalidAction`] if the cell is
    /// already occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if action.row >= SIZE || action.col >= SIZE {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
                size: SIZE,
            });
        }

        if !self.is_empty(action.row, action.col) {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one.
    ///
    /// Uses per-line running scores; see [`LineScores`] for the scan order
    /// and its behavior on illegally constructed boards.
    pub fn winner(&self) -> Option<Player> {
        LineScores::of(self).winner()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.occupied_count() == SIZE * SIZE
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.occupied_count() == SIZE * SIZE && self.winner().is_none()
    }

    /// Game value from X's perspective: +1 X win, -1 O win, 0 otherwise.
    ///
    /// Meaningful only on terminal boards; callers are trusted to check
    /// [`is_terminal`](Self::is_terminal) first.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Create a board from a string of 9 cell characters in row-major order.
    ///
    /// Whitespace is filtered out, so "XX. OO. ..." and "XX.OO...." parse to
    /// the same board. Cell characters are '.', 'X', and 'O' (forgiving case,
    /// and '0' for O).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable by X-first alternating play
    ///   (X count minus O count must be 0 or 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(SIZE * SIZE).enumerate() {
            board.cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let x_count = board
            .cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::X)
            .count();
        let o_count = board
            .cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::O)
            .count();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Row-major string encoding for use as a key (9 cell characters).
    ///
    /// Since the player to move is derived from occupancy, the encoding
    /// uniquely identifies the game state.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&c| c.to_char())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
