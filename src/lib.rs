//! # data-service
//!
//! A small data service with four independent operations:
//!
//! - **`parse_data`**: strips every whitespace character from a string
//! - **`complex_calculation`**: sums `a[i] + a[j]` over all index pairs `i < j`
//! - **`connect_to_database`** / **`process_request`**: service hooks with
//!   no backend attached
//!
//! A `data-service` binary exposes each operation as a subcommand.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod calc;
pub mod cli;
pub mod error;
pub mod logging;
pub mod service;
pub mod text;

// Re-export commonly used types at crate root
pub use error::{CalculationError, CommandError, Error, Result};

pub use service::DataService;

pub use calc::{pair_count, pairwise_sum};
pub use text::{contains_whitespace, is_ascii_space, strip_whitespace};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
