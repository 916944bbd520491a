//! Tic-Tac-Toe game engine
//!
//! This crate provides:
//! - A rules engine: move application and win/draw detection on a 3x3 board
//! - Computer opponents at three difficulty tiers, the hardest an exact
//!   alpha-beta minimax search
//! - A session layer for human-vs-computer play with turn checks and scores
//! - An arena for batch play between tiers, and a command-line front end
//!
//! The engine itself is stateless: boards are plain values passed in and
//! returned, and every call is independent of the previous one.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictactoe_engine::{Difficulty, GameOutcome, Symbol, apply_move, evaluate, select_move};
//!
//! let board = apply_move(&Default::default(), 0, Symbol::X)?;
//! let board = apply_move(&board, 1, Symbol::X)?;
//! assert_eq!(evaluate(&board), GameOutcome::InProgress);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let reply = select_move(&board, Symbol::O, Symbol::X, Difficulty::Normal, &mut rng)?;
//! assert_eq!(reply, 2);
//! # Ok::<(), tictactoe_engine::Error>(())
//! ```

pub mod arena;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod strategy;
pub mod tictactoe;

pub use arena::{Arena, ArenaConfig, ArenaResult};
pub use config::SessionConfig;
pub use error::{Error, InvalidMoveKind, Result};
pub use session::{Scoreboard, Session};
pub use strategy::{Difficulty, Opponent, select_move};
pub use tictactoe::{Board, Cell, GameOutcome, Symbol, WIN_LINES, WinLine, apply_move, evaluate};
