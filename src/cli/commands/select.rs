//! Select command - Ask a difficulty tier for the computer's move

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    config::SessionConfig,
    strategy::{Difficulty, select_move},
    tictactoe::{Board, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Pick the computer's move on a board")]
pub struct SelectArgs {
    /// Board as nine cells (X, O, or . for empty)
    pub board: Board,

    /// Symbol the computer plays (defaults to the config's, else O)
    #[arg(long, short = 'c')]
    pub computer: Option<Symbol>,

    /// Difficulty tier: easy, normal or hard
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Session configuration file (JSON); flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: SelectArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::new(Symbol::X),
    };

    let computer = args.computer.unwrap_or_else(|| config.computer_symbol());
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let seed = args.seed.or(config.seed).unwrap_or_else(random::<u64>);

    let mut rng = StdRng::seed_from_u64(seed);
    let position = select_move(&args.board, computer, computer.other(), difficulty, &mut rng)?;

    println!("{position}");
    Ok(())
}
