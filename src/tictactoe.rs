//! Tic-Tac-Toe board and rules

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{Board, CELL_COUNT, Cell, Symbol};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WIN_LINES, WinLine};
pub use rules::{GameOutcome, apply_move, evaluate};
