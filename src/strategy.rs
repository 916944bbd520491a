//! Computer opponent strategies
//!
//! Three policies, one per difficulty tier:
//! - [`Difficulty::Easy`]: uniform random empty cell
//! - [`Difficulty::Normal`]: win now, else block, else random
//! - [`Difficulty::Hard`]: exhaustive minimax with alpha-beta pruning
//!
//! [`select_move`] is the stateless entry point; the [`Opponent`] trait wraps
//! each policy together with its own random source for callers that keep one
//! opponent across many moves.

pub mod difficulty;
pub mod heuristic;
pub mod minimax;
pub mod random;

use rand::Rng;
use tracing::{debug, instrument};

pub use difficulty::Difficulty;
pub use heuristic::{
    HeuristicOpponent, HeuristicStage, blocking_cell, heuristic_choice, heuristic_move,
    winning_cell,
};
pub use minimax::{
    MinimaxOpponent, MinimaxSearch, SEARCH_ORDER, SearchResult, minimax_move, score_moves,
};
pub use random::{RandomOpponent, random_move};

use crate::{
    Error, Result,
    tictactoe::{Board, Symbol},
};

/// Opponent trait - unified interface for the computer player
///
/// Implementations are `Send` so a session owning one can move across
/// threads, but each call runs to completion on the caller's thread.
pub trait Opponent: Send {
    /// Difficulty tier this opponent plays at
    fn difficulty(&self) -> Difficulty;

    /// Get the opponent's name.
    ///
    /// Used for identification in logs and arena reports.
    fn name(&self) -> &str;

    /// Select a move for `computer` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] when the board is already won or full.
    fn select_move(&mut self, board: &Board, computer: Symbol) -> Result<usize>;

    /// Seed the opponent's internal random number generator.
    ///
    /// The default implementation does nothing, suitable for deterministic
    /// opponents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

/// Pick a move for the computer.
///
/// `rng` is only consulted by the Easy policy and by Normal's fallback, so a
/// seeded generator makes every difficulty reproducible; Hard never touches it.
///
/// # Errors
///
/// - [`Error::SymbolConflict`] if `computer == human`
/// - [`Error::NoLegalMove`] if the board is already won or full
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Symbol,
    human: Symbol,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize> {
    if computer == human {
        return Err(Error::SymbolConflict { symbol: computer });
    }

    let position = match difficulty {
        Difficulty::Easy => random_move(board, rng)?,
        Difficulty::Normal => heuristic_move(board, computer, human, rng)?,
        Difficulty::Hard => minimax_move(board, computer)?,
    };

    debug!(position, "selected move");
    Ok(position)
}

/// Fail with [`Error::NoLegalMove`] unless the game on `board` is still running
pub(crate) fn ensure_in_progress(board: &Board) -> Result<()> {
    if board.is_terminal() {
        Err(Error::NoLegalMove)
    } else {
        Ok(())
    }
}
