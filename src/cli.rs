//! CLI command implementations
//!
//! Thin callers over the engine, per the library contract: parse a board,
//! run the search, apply moves, print. No game logic lives here.

use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    fs,
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    board::{Action, Board, Player},
    game::{Game, GameOutcome},
    search::{evaluate_actions, minimax},
};

#[derive(Args)]
pub struct SolveArgs {
    /// Board as 9 cell characters ('.', 'X', 'O') in row-major order
    pub board: String,

    /// Show every minimax-equivalent action instead of just the first
    #[arg(long)]
    pub full: bool,
}

/// Print the optimal action(s) for a position
pub fn solve(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    println!("{board}");

    if board.is_terminal() {
        match board.winner() {
            Some(winner) => println!("Game over: {winner:?} has won (utility {})", board.utility()),
            None => println!("Game over: draw (utility 0)"),
        }
        return Ok(());
    }

    println!("{:?} to move", board.player());

    if args.full {
        let values = evaluate_actions(&board);
        let best = match board.player() {
            Player::X => values.iter().map(|&(_, v)| v).max(),
            Player::O => values.iter().map(|&(_, v)| v).min(),
        }
        .context("non-terminal board has no actions")?;

        println!("Optimal actions (all minimax-equivalent, value {best}):");
        for (action, value) in values {
            if value == best {
                println!("  - {action}");
            }
        }
    } else {
        let action = minimax(&board).context("non-terminal board has no optimal action")?;
        println!("Optimal action: {action}");
    }

    Ok(())
}

/// Opponent policy for the O side of a played-out game
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentPolicy {
    /// O also plays minimax-optimally (always ends in a draw)
    Minimax,
    /// O plays uniformly at random
    Random,
}

#[derive(Args)]
pub struct PlayArgs {
    /// Policy for the O player; X always plays minimax
    #[arg(long, value_enum, default_value = "minimax")]
    pub opponent: OpponentPolicy,

    /// RNG seed for the random opponent
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Play out a full game from the empty board, printing each ply
pub fn play(args: PlayArgs) -> Result<()> {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(args.seed);

    while game.outcome.is_none() {
        let state = game.current_state()?;
        let player = state.player();

        let action = match (player, args.opponent) {
            (Player::O, OpponentPolicy::Random) => {
                let actions = state.actions();
                actions[rng.gen_range(0..actions.len())]
            }
            _ => match minimax(&state) {
                Some(action) => action,
                None => bail!("search returned no action on a non-terminal board"),
            },
        };

        println!("{player:?} plays {action}");
        game.play(action)?;
    }

    let final_state = game.current_state()?;
    println!("\n{final_state}\n");
    match game.outcome {
        Some(GameOutcome::Win(winner)) => {
            println!("{winner:?} wins (utility {})", final_state.utility());
        }
        Some(GameOutcome::Draw) => println!("Draw (utility 0)"),
        None => unreachable!("loop exits only once the outcome is set"),
    }

    Ok(())
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output path for the JSON policy file
    pub path: PathBuf,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct PolicyExport {
    pub description: String,
    pub total_states: usize,
    /// Optimal action per non-terminal state, keyed by board encoding
    pub policy: BTreeMap<String, Action>,
}

/// Export the optimal action for every reachable non-terminal state
pub fn export(args: ExportArgs) -> Result<()> {
    let mut policy = BTreeMap::new();

    for board in collect_reachable_states() {
        if let Some(action) = minimax(&board) {
            policy.insert(board.encode(), action);
        }
    }

    let export = PolicyExport {
        description: "Minimax-optimal action per reachable non-terminal state".to_string(),
        total_states: policy.len(),
        policy,
    };

    let json = serde_json::to_string_pretty(&export)?;
    fs::write(&args.path, json)
        .with_context(|| format!("failed to write policy to {}", args.path.display()))?;

    println!("Exported {} states to {}", export.total_states, args.path.display());
    Ok(())
}

/// Enumerate every board reachable from the empty board by legal play,
/// stopping expansion at terminal boards.
fn collect_reachable_states() -> Vec<Board> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut states = Vec::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        states.push(state);

        if state.is_terminal() {
            continue;
        }

        for action in state.actions() {
            let Ok(next) = state.apply(action) else {
                continue;
            };
            if visited.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_state_counts_match_expected() {
        let states = collect_reachable_states();
        // Classic enumeration without symmetry reduction: 5478 reachable
        // boards, 958 of them terminal
        assert_eq!(states.len(), 5478);
        assert_eq!(states.iter().filter(|s| s.is_terminal()).count(), 958);
    }

    #[test]
    fn export_writes_full_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");

        export(ExportArgs { path: path.clone() }).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let parsed: PolicyExport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.total_states, 5478 - 958);
        assert_eq!(parsed.policy.len(), parsed.total_states);

        // Empty board ties break to the origin
        assert_eq!(parsed.policy["........."], Action::new(0, 0));
        // Forced win: X completes the top row
        assert_eq!(parsed.policy["XX.OO...."], Action::new(0, 2));
    }
}
