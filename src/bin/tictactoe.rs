//! Tic-Tac-Toe CLI
//!
//! Subcommands:
//! - Classifying a board
//! - Asking a difficulty tier for its move
//! - Inspecting minimax scores for a position
//! - Playing tiers against each other in bulk
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see search and round details.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_engine::cli::commands::{analyze, arena, evaluate, select};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe engine with three difficulty tiers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a board as in progress, won or drawn
    Evaluate(evaluate::EvaluateArgs),

    /// Pick the computer's move on a board
    Select(select::SelectArgs),

    /// Show minimax scores and the heuristic choice for a board
    Analyze(analyze::AnalyzeArgs),

    /// Play two difficulty tiers against each other
    Arena(arena::ArenaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Select(args) => select::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Arena(args) => arena::execute(args),
    }
}
