//! Exhaustive minimax search over the remaining game tree
//!
//! The search is a pure depth-first walk driven by two mutually recursive
//! procedures, one per player. There is no pruning, memoization, or depth
//! limit: depth is bounded by the number of empty cells, which keeps the
//! full tree small on a 3x3 board.

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// Value and achieving action for a searched position.
///
/// The value is from X's perspective (+1 X win, -1 O win, 0 draw under the
/// recorded line of play). `action` is `None` only at a terminal leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: i32,
    pub action: Option<Action>,
}

/// Optimal action for the player to move on `board`.
///
/// Returns `None` on a terminal board; callers should check
/// [`Board::is_terminal`] before relying on an action being produced.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    match board.player() {
        Player::X => max_value(board).action,
        Player::O => min_value(board).action,
    }
}

/// Best outcome X can guarantee from `board`, assuming X is to move.
///
/// Actions are scanned in row-major order and the best is updated only on
/// strict improvement, so among equal-valued actions the first one scanned
/// (lexicographically smallest (row, col)) is the one reported.
pub fn max_value(board: &Board) -> Evaluation {
    if board.is_terminal() {
        return Evaluation {
            value: board.utility(),
            action: None,
        };
    }

    let mut best = Evaluation {
        value: i32::MIN,
        action: None,
    };

    for action in board.actions() {
        // actions() only yields empty cells, so apply cannot fail here
        let Ok(next) = board.apply(action) else {
            continue;
        };
        let reply = min_value(&next);
        if reply.value > best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }
    }

    best
}

/// Best outcome O can guarantee from `board`, assuming O is to move.
///
/// Symmetric to [`max_value`], minimizing on strict `<` instead.
pub fn min_value(board: &Board) -> Evaluation {
    if board.is_terminal() {
        return Evaluation {
            value: board.utility(),
            action: None,
        };
    }

    let mut best = Evaluation {
        value: i32::MAX,
        action: None,
    };

    for action in board.actions() {
        let Ok(next) = board.apply(action) else {
            continue;
        };
        let reply = max_value(&next);
        if reply.value < best.value {
            best = Evaluation {
                value: reply.value,
                action: Some(action),
            };
        }
    }

    best
}

/// Minimax value of every legal action from `board`, in row-major order.
pub fn evaluate_actions(board: &Board) -> Vec<(Action, i32)> {
    let mover = board.player();
    let mut values = Vec::new();

    for action in board.actions() {
        let Ok(next) = board.apply(action) else {
            continue;
        };
        let eval = match mover {
            Player::X => min_value(&next),
            Player::O => max_value(&next),
        };
        values.push((action, eval.value));
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimax_returns_none_on_terminal_board() {
        let won = Board::from_string("XXX OO. ...").unwrap();
        assert!(minimax(&won).is_none());

        let drawn = Board::from_string("XOX XXO OXO").unwrap();
        assert!(minimax(&drawn).is_none());
    }

    #[test]
    fn x_completes_a_winning_row() {
        // X X .
        // O O .
        // . . .
        let board = Board::from_string("XX. OO. ...").unwrap();
        assert_eq!(board.player(), Player::X);

        let action = minimax(&board).unwrap();
        assert_eq!(action, Action::new(0, 2));

        let next = board.apply(action).unwrap();
        assert!(next.is_terminal());
        assert_eq!(next.utility(), 1);
    }

    #[test]
    fn o_completes_a_winning_row() {
        // X . X
        // O O .
        // . X .
        //
        // O to move. Blocking X at (0, 1) comes first in scan order but only
        // draws; completing the middle row at (1, 2) wins outright.
        let board = Board::from_string("X.X OO. .X.").unwrap();
        assert_eq!(board.player(), Player::O);

        let eval = min_value(&board);
        assert_eq!(eval.value, -1);
        assert_eq!(eval.action, Some(Action::new(1, 2)));

        let next = board.apply(eval.action.unwrap()).unwrap();
        assert_eq!(next.utility(), -1);
    }

    #[test]
    fn o_blocks_when_it_cannot_win() {
        // X X .
        // . O .
        // . . .
        //
        // O to move and must block at (0, 2); anything else loses, and the
        // block leads to a draw under perfect play.
        let board = Board::from_string("XX. .O. ...").unwrap();
        assert_eq!(board.player(), Player::O);

        let eval = min_value(&board);
        assert_eq!(eval.action, Some(Action::new(0, 2)));
        assert_eq!(eval.value, 0);

        // Ignoring the threat hands X the game
        let ignored = board.apply(Action::new(2, 2)).unwrap();
        assert_eq!(max_value(&ignored).value, 1);
    }

    #[test]
    fn first_of_equal_wins_is_kept() {
        // X X .
        // X O .
        // . O O
        //
        // X to move with two immediate wins: (0, 2) and (2, 0). Row-major
        // scan order keeps (0, 2).
        let board = Board::from_string("XX. XO. .OO").unwrap();
        assert_eq!(board.player(), Player::X);

        let eval = max_value(&board);
        assert_eq!(eval.value, 1);
        assert_eq!(eval.action, Some(Action::new(0, 2)));
    }

    #[test]
    fn opening_move_tie_breaks_to_origin() {
        // Every opening move draws under perfect play, so the row-major
        // tie-break selects (0, 0).
        let board = Board::new();
        let eval = max_value(&board);
        assert_eq!(eval.value, 0);
        assert_eq!(eval.action, Some(Action::new(0, 0)));
        assert_eq!(minimax(&board), Some(Action::new(0, 0)));
    }

    #[test]
    fn evaluate_actions_covers_all_legal_moves() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        let values = evaluate_actions(&board);
        assert_eq!(values.len(), board.actions().len());

        // Winning immediately at (0, 2); leaving O's row open loses
        assert!(values.contains(&(Action::new(0, 2), 1)));
        assert!(values.contains(&(Action::new(2, 0), -1)));
    }
}
