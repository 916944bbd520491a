//! Command-line interface for the Tic-Tac-Toe engine
//!
//! This module provides subcommands to classify boards, ask a difficulty
//! tier for a move, inspect the minimax scores of a position and run batch
//! matches between tiers.

pub mod commands;
pub mod output;
