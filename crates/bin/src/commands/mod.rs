//! Subcommand implementations.

pub mod details;
pub mod info;
pub mod resolve;
