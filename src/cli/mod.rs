//! CLI layer for the data service.
//!
//! Provides the command-line interface using clap, with one command per
//! service operation.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with_input};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
