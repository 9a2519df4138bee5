//! Text utilities.
//!
//! Whitespace handling used by [`DataService::parse_data`](crate::DataService::parse_data).

pub mod whitespace;

pub use whitespace::{contains_whitespace, is_ascii_space, strip_whitespace};
