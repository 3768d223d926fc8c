//! Exhaustive minimax play for Tic-Tac-Toe
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board representation with legality checks
//! - Winner detection via generalized per-line scoring
//! - Mutually recursive minimax search returning optimal actions
//! - Game history tracking for driving a full play loop

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;

pub use board::{Action, Board, Cell, Player, SIZE};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LINE_COUNT, LineScores};
pub use search::{Evaluation, evaluate_actions, max_value, min_value, minimax};
