//! Error types for data service operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! calculation routines and the CLI commands.

use thiserror::Error;

/// Result type alias for data service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Numeric calculation errors.
    #[error("calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors (stdin/stdout).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors raised by the numeric routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Pairwise total does not fit in the result type.
    #[error("pairwise total of {len} numbers overflows i64")]
    Overflow {
        /// Number of input values.
        len: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
