//! Pairwise accumulation over integer slices.
//!
//! The pairwise total visits every unordered index pair `(i, j)` with
//! `i < j` and adds `numbers[i] + numbers[j]`. Each element takes part in
//! `n - 1` pairs, so the total is `(n - 1) * sum`, which is what
//! [`pairwise_sum`] computes in a single pass.

use crate::error::CalculationError;

/// Computes the sum of `numbers[i] + numbers[j]` over all pairs `i < j`.
///
/// Fewer than two numbers form no pairs and yield `0`. The running sum is
/// kept in an `i128`, so intermediate values never wrap; only a final total
/// outside the `i64` range is reported. Totals never wrap: a result that a
/// 32-bit accumulator would have wrapped, such as `4_000_000_000` for
/// `[2_000_000_000, 2_000_000_000]`, is returned exactly.
///
/// # Errors
///
/// Returns [`CalculationError::Overflow`] if the total does not fit in `i64`.
///
/// # Examples
///
/// ```
/// use data_service::calc::pairwise_sum;
///
/// // (1+2) + (1+3) + (2+3)
/// assert_eq!(pairwise_sum(&[1, 2, 3]).unwrap(), 12);
/// assert_eq!(pairwise_sum(&[]).unwrap(), 0);
/// ```
pub fn pairwise_sum(numbers: &[i64]) -> Result<i64, CalculationError> {
    let len = numbers.len();
    if len < 2 {
        return Ok(0);
    }

    let overflow = CalculationError::Overflow { len };
    let sum: i128 = numbers.iter().copied().map(i128::from).sum();
    let multiplier = i128::try_from(len - 1).map_err(|_| overflow.clone())?;

    sum.checked_mul(multiplier)
        .and_then(|total| i64::try_from(total).ok())
        .ok_or(overflow)
}

/// Number of unordered pairs `(i, j)` with `i < j` among `len` items.
///
/// Saturates at `u64::MAX`.
#[must_use]
pub fn pair_count(len: usize) -> u64 {
    let len = u128::from(u64::try_from(len).unwrap_or(u64::MAX));
    let pairs = len * len.saturating_sub(1) / 2;
    u64::try_from(pairs).unwrap_or(u64::MAX)
}
