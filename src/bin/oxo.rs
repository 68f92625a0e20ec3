//! oxo CLI - exhaustive 3x3 Tic-Tac-Toe solver
//!
//! Builds the complete game tree, solves it by minimax, and either plays
//! games along the solved tree or reports statistics about it.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Exhaustive Tic-Tac-Toe game-tree solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Tic-Tac-Toe along the solved tree
    Play(oxo::cli::commands::play::PlayArgs),

    /// Inspect the generated game tree
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
    }
}
