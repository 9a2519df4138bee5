//! The `DataService` front door.
//!
//! Bundles the text and calculation routines with the two service hooks.
//! No database backend or request pipeline is attached to the hooks;
//! they only log that they ran.

use crate::calc::pairwise_sum;
use crate::error::Result;
use crate::text::strip_whitespace;
use tracing::{debug, trace};

/// Stateless data service.
///
/// # Examples
///
/// ```
/// use data_service::DataService;
///
/// let service = DataService::new();
/// assert_eq!(service.parse_data("a b c"), "abc");
/// assert_eq!(service.complex_calculation(&[1, 2, 3]).unwrap(), 12);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DataService;

#[allow(clippy::unused_self)]
impl DataService {
    /// Creates a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Removes all whitespace from `input`.
    #[must_use]
    pub fn parse_data(&self, input: &str) -> String {
        let output = strip_whitespace(input);
        trace!(
            input_len = input.len(),
            output_len = output.len(),
            "parsed data"
        );
        output
    }

    /// Database connection hook.
    ///
    /// No backend is attached, so this never opens anything and always
    /// succeeds.
    pub fn connect_to_database(&self) -> Result<()> {
        debug!(hook = "connect", "no database backend configured");
        Ok(())
    }

    /// Request handling hook. Does nothing.
    pub fn process_request(&self) -> Result<()> {
        debug!(hook = "process", "request processed");
        Ok(())
    }

    /// Sums `numbers[i] + numbers[j]` over every pair `i < j`.
    ///
    /// See [`pairwise_sum`] for the exact contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the total overflows `i64`.
    pub fn complex_calculation(&self, numbers: &[i64]) -> Result<i64> {
        let total = pairwise_sum(numbers)?;
        trace!(count = numbers.len(), total, "pairwise total computed");
        Ok(total)
    }
}
