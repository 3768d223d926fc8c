//! ttt CLI - optimal Tic-Tac-Toe play from the command line
//!
//! This CLI provides a thin interface over the engine:
//! - Solving individual positions
//! - Playing out full games (minimax vs. minimax or vs. random)
//! - Exporting the complete optimal policy as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimal action for a board position
    Solve(tictactoe_minimax::cli::SolveArgs),

    /// Play out a full game from the empty board
    Play(tictactoe_minimax::cli::PlayArgs),

    /// Export the optimal action for every reachable state as JSON
    Export(tictactoe_minimax::cli::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => tictactoe_minimax::cli::solve(args),
        Commands::Play(args) => tictactoe_minimax::cli::play(args),
        Commands::Export(args) => tictactoe_minimax::cli::export(args),
    }
}
