//! CLI subcommand implementations.

pub mod parking;
pub mod types;
