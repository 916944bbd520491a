//! Normal tier: greedy one-ply heuristic
//!
//! Stages are tried in a fixed order and the first one that yields a cell
//! wins:
//! 1. complete one of the computer's lines
//! 2. block one of the human's lines
//! 3. any empty cell, uniformly at random
//!
//! Within a stage, lines are scanned in [`WIN_LINES`] order. There is no
//! look-ahead beyond the current ply, so forks are neither created nor seen
//! coming.
//!
//! [`WIN_LINES`]: crate::tictactoe::WIN_LINES

use std::fmt;

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::trace;

use super::{Difficulty, Opponent, ensure_in_progress, random::random_move};
use crate::{
    Result,
    tictactoe::{Board, LineAnalyzer, Symbol},
};

/// Which stage of the heuristic produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicStage {
    Win,
    Block,
    Random,
}

impl fmt::Display for HeuristicStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicStage::Win => f.write_str("win"),
            HeuristicStage::Block => f.write_str("block"),
            HeuristicStage::Random => f.write_str("random"),
        }
    }
}

/// Cell that completes one of `computer`'s lines right now, if any
pub fn winning_cell(board: &Board, computer: Symbol) -> Option<usize> {
    LineAnalyzer::first_completing_cell(board.cells(), computer)
}

/// Cell that stops `human` from completing a line on their next move, if any
pub fn blocking_cell(board: &Board, human: Symbol) -> Option<usize> {
    LineAnalyzer::first_completing_cell(board.cells(), human)
}

/// Run the stages in order and report which one fired
pub fn heuristic_choice<R: Rng + ?Sized>(
    board: &Board,
    computer: Symbol,
    human: Symbol,
    rng: &mut R,
) -> Result<(usize, HeuristicStage)> {
    ensure_in_progress(board)?;

    let choice = if let Some(pos) = winning_cell(board, computer) {
        (pos, HeuristicStage::Win)
    } else if let Some(pos) = blocking_cell(board, human) {
        (pos, HeuristicStage::Block)
    } else {
        (random_move(board, rng)?, HeuristicStage::Random)
    };

    trace!(position = choice.0, stage = %choice.1, "heuristic choice");
    Ok(choice)
}

/// Win, else block, else random
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Symbol,
    human: Symbol,
    rng: &mut R,
) -> Result<usize> {
    heuristic_choice(board, computer, human, rng).map(|(pos, _)| pos)
}

/// Heuristic opponent (wins when it can, blocks when it must)
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    /// Create a heuristic opponent, seeded from `seed` or from entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random::<u64>)),
        }
    }
}

impl Opponent for HeuristicOpponent {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Normal
    }

    fn name(&self) -> &str {
        "Heuristic"
    }

    fn select_move(&mut self, board: &Board, computer: Symbol) -> Result<usize> {
        heuristic_move(board, computer, computer.other(), &mut self.rng)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
