//! Hard tier: exhaustive minimax with alpha-beta pruning
//!
//! The search runs from the current board to every terminal position,
//! alternating movers with the computer first. Terminal positions score
//!
//! ```text
//! computer win   10 - depth
//! human win      depth - 10
//! draw           0
//! ```
//!
//! where `depth` counts plies from the searched board, so among equally won
//! lines the quickest is preferred, and among lost ones the slowest. Children
//! are visited centre first, then corners, then edges ([`SEARCH_ORDER`]); the
//! first move reaching the best score in that order is returned.
//!
//! Boards are copied down the recursion, nothing is mutated in place.

use tracing::{instrument, trace};

use super::{Difficulty, Opponent, ensure_in_progress};
use crate::{
    Error, Result,
    tictactoe::{Board, GameOutcome, Symbol, evaluate},
};

/// Child visiting order: centre, corners, edges
pub const SEARCH_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Score of an immediate win, before the depth penalty
pub const WIN_SCORE: i32 = 10;

const INFINITY: i32 = i32::MAX;

/// Best move found by a search and its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: usize,
    pub score: i32,
}

/// A single alpha-beta search from the computer's point of view.
///
/// Keeps node and cutoff counters so callers can see how much work a search
/// took; a fresh value should be used per search if the counters matter.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxSearch {
    computer: Symbol,
    nodes: u64,
    cutoffs: u64,
}

impl MinimaxSearch {
    pub fn new(computer: Symbol) -> Self {
        Self {
            computer,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Positions visited, terminal ones included
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Times a sibling loop was abandoned because `beta <= alpha`
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Find the computer's best move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if the board is already won or full.
    #[instrument(skip(self, board), fields(board = %board, computer = %self.computer))]
    pub fn best_move(&mut self, board: &Board) -> Result<SearchResult> {
        ensure_in_progress(board)?;

        let (score, position) = self.search(*board, self.computer, 0, -INFINITY, INFINITY);
        let position = position.ok_or(Error::NoLegalMove)?;

        trace!(
            position,
            score,
            nodes = self.nodes,
            cutoffs = self.cutoffs,
            "minimax search finished"
        );
        Ok(SearchResult { position, score })
    }

    /// Exact minimax value of `board` with `mover` to play, `depth` plies
    /// below the root
    pub fn value(&mut self, board: &Board, mover: Symbol, depth: i32) -> i32 {
        self.search(*board, mover, depth, -INFINITY, INFINITY).0
    }

    fn terminal_score(&self, outcome: GameOutcome, depth: i32) -> Option<i32> {
        match outcome {
            GameOutcome::Won(winner, _) if winner == self.computer => Some(WIN_SCORE - depth),
            GameOutcome::Won(_, _) => Some(depth - WIN_SCORE),
            GameOutcome::Draw => Some(0),
            GameOutcome::InProgress => None,
        }
    }

    fn search(
        &mut self,
        board: Board,
        mover: Symbol,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(evaluate(&board), depth) {
            return (score, None);
        }

        let maximizing = mover == self.computer;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for pos in SEARCH_ORDER {
            let Ok(child) = board.apply_move(pos, mover) else {
                continue;
            };

            let (score, _) = self.search(child, mover.other(), depth + 1, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Best move for `computer` by exhaustive alpha-beta search
pub fn minimax_move(board: &Board, computer: Symbol) -> Result<usize> {
    MinimaxSearch::new(computer)
        .best_move(board)
        .map(|result| result.position)
}

/// Exact minimax score of every legal move for `computer`, in
/// [`SEARCH_ORDER`].
///
/// Each child is searched with a full window, so the scores are exact rather
/// than alpha-beta bounds.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the board is already won or full.
pub fn score_moves(board: &Board, computer: Symbol) -> Result<Vec<(usize, i32)>> {
    ensure_in_progress(board)?;

    let mut search = MinimaxSearch::new(computer);
    let mut scored = Vec::new();
    for pos in SEARCH_ORDER {
        if let Ok(child) = board.apply_move(pos, computer) {
            scored.push((pos, search.value(&child, computer.other(), 1)));
        }
    }
    Ok(scored)
}

/// Minimax opponent (never loses)
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxOpponent;

impl MinimaxOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for MinimaxOpponent {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn select_move(&mut self, board: &Board, computer: Symbol) -> Result<usize> {
        minimax_move(board, computer)
    }
}
