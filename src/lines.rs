//! Winning line analysis via per-line running scores

use crate::board::{Board, Cell, Player, SIZE};

/// Number of lines on the board: N rows, N columns, and two diagonals.
pub const LINE_COUNT: usize = 2 * SIZE + 2;

/// Accumulated score per line: +1 for each X cell, -1 for each O cell.
///
/// A line scoring +N is fully owned by X, -N by O. Scores are ordered rows
/// first (by index), then columns (by index), then the main diagonal, then
/// the anti-diagonal.
///
/// On boards reachable by legal alternating play at most one line is fully
/// owned, so scan order never matters there. On illegally constructed boards
/// with two opposing full lines, whichever comes first in scan order wins;
/// this leniency is deliberate and not validated against.
#[derive(Debug, Clone, Copy)]
pub struct LineScores {
    scores: [i32; LINE_COUNT],
}

impl LineScores {
    /// Accumulate scores for every line through every cell of `board`.
    pub fn of(board: &Board) -> Self {
        let mut scores = [0i32; LINE_COUNT];

        for row in 0..SIZE {
            for col in 0..SIZE {
                let points = match board.cells[row][col] {
                    Cell::X => 1,
                    Cell::O => -1,
                    Cell::Empty => 0,
                };
                scores[row] += points;
                scores[SIZE + col] += points;
                if row == col {
                    scores[2 * SIZE] += points;
                }
                if row + col == SIZE - 1 {
                    scores[2 * SIZE + 1] += points;
                }
            }
        }

        LineScores { scores }
    }

    /// Owner of the first fully scored line, if any.
    pub fn winner(&self) -> Option<Player> {
        for &score in &self.scores {
            if score == SIZE as i32 {
                return Some(Player::X);
            }
            if score == -(SIZE as i32) {
                return Some(Player::O);
            }
        }
        None
    }
}
