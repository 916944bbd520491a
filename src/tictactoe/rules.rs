//! Rules engine: move application and outcome detection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Symbol},
    lines::{LineAnalyzer, WinLine},
};
use crate::Result;

/// Outcome of a board, derived from its cells alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won(Symbol, WinLine),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameOutcome::Won(symbol, _) => Some(symbol),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::Won(symbol, [a, b, c]) => write!(f, "{symbol} wins on {a}-{b}-{c}"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Place `symbol` on `index` and return the new board.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMove`] when `index` is outside 0-8 or the
/// cell is occupied; `board` is left as it was.
pub fn apply_move(board: &Board, index: usize, symbol: Symbol) -> Result<Board> {
    board.apply_move(index, symbol)
}

/// Classify a board.
///
/// Lines are scanned in [`super::WIN_LINES`] order and the first complete one
/// is reported, so a board with two complete lines always gives the same
/// answer. A full board with no complete line is a draw.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((symbol, line)) = LineAnalyzer::completed_line(board.cells()) {
        GameOutcome::Won(symbol, line)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

impl Board {
    /// Shorthand for [`evaluate`]
    pub fn outcome(&self) -> GameOutcome {
        evaluate(self)
    }

    /// Check if the game on this board is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Empty cells while the game is still in progress, nothing otherwise
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::EMPTY), GameOutcome::InProgress);
        assert_eq!(Board::EMPTY.legal_moves().len(), 9);
    }

    #[test]
    fn won_board_has_no_legal_moves() {
        let board: Board = "OOO.XX.X.".parse().unwrap();
        assert_eq!(board.outcome(), GameOutcome::Won(Symbol::O, [0, 1, 2]));
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.outcome().winner(), Some(Symbol::O));
    }

    #[test]
    fn outcome_display() {
        assert_eq!(GameOutcome::Won(Symbol::X, [2, 4, 6]).to_string(), "X wins on 2-4-6");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
    }
}
