//! CLI subcommands

pub mod analyze;
pub mod arena;
pub mod evaluate;
pub mod select;
