//! High-level game management
//!
//! [`Game`] packages the caller-side loop: it holds the move history,
//! validates and applies moves, and records the outcome once the board
//! turns terminal.

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
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

    /// Play a move for the player whose turn it is
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, or
    /// the underlying [`Board::apply`] error for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.apply(action)?;

        self.moves.push(Move {
            action,
            player: current.player(),
        });

        if next.is_terminal() {
            self.outcome = Some(if let Some(winner) = next.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Get the current board state by replaying the history
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was recorded against. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for m in &self.moves {
            state = state.apply(m.action)?;
        }
        Ok(state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_play_records_history_and_outcome() {
        let mut game = Game::new();
        let line = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
        for &(row, col) in &line {
            game.play(Action::new(row, col)).unwrap();
        }

        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));

        let state = game.current_state().unwrap();
        assert_eq!(state.get(0, 2), Cell::X);
    }

    #[test]
    fn test_play_rejects_moves_after_game_over() {
        let mut game = Game::new();
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }

        let err = game.play(Action::new(2, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();

        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidAction { row: 1, col: 1 }));
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_drawn_game_outcome() {
        let mut game = Game::new();
        for &(row, col) in &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ] {
            game.play(Action::new(row, col)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert!(game.current_state().unwrap().is_draw());
    }
}
