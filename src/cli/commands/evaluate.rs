//! Evaluate command - Classify a board as in progress, won or drawn

use anyhow::Result;
use clap::Parser;

use crate::tictactoe::{Board, evaluate};

#[derive(Parser, Debug)]
#[command(about = "Classify a board")]
pub struct EvaluateArgs {
    /// Board as nine cells (X, O, or . for empty), e.g. "XO..X...O"
    pub board: Board,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let outcome = evaluate(&args.board);

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    println!("{}", args.board.grid());
    println!("\nOutcome: {outcome}");
    Ok(())
}
