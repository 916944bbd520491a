//! Error types for the Tic-Tac-Toe engine

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Symbol;

/// Why a move was rejected by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveKind {
    /// Index outside 0-8
    OutOfRange,
    /// Cell already holds a symbol
    Occupied(Symbol),
}

impl fmt::Display for InvalidMoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveKind::OutOfRange => write!(f, "out of bounds (must be 0-8)"),
            InvalidMoveKind::Occupied(symbol) => write!(f, "already occupied by {symbol}"),
        }
    }
}

/// Main error type for the engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is {kind}")]
    InvalidMove {
        position: usize,
        kind: InvalidMoveKind,
    },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("round already over")]
    GameOver,

    #[error("not {got}'s turn: {expected} is to move")]
    NotYourTurn { expected: Symbol, got: Symbol },

    #[error("computer and human cannot both play {symbol}")]
    SymbolConflict { symbol: Symbol },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid symbol '{input}' (expected 'X' or 'O')")]
    InvalidSymbol { input: String },

    #[error("invalid difficulty '{input}'. Expected one of: easy, normal, hard")]
    InvalidDifficulty { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a rejected move (out of range or occupied)
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
