//! CLI subcommand implementations.

pub mod cases;
pub mod parse;
pub mod run;
pub mod series;
