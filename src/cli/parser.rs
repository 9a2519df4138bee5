//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// Environment variable that sets the default output format.
pub const FORMAT_ENV: &str = "DATA_SERVICE_FORMAT";

/// data-service: whitespace stripping, pairwise totals and service hooks.
#[derive(Parser, Debug)]
#[command(name = "data-service")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = FORMAT_ENV)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove all whitespace from text.
    Parse {
        /// Text to clean (reads from stdin if not provided).
        text: Option<String>,
    },

    /// Sum numbers[i] + numbers[j] over every pair i < j.
    Calc {
        /// Integers to combine.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Run the database connection hook.
    Connect,

    /// Run the request processing hook.
    Process,
}
