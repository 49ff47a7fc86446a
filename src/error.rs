//! Error types for bloomgate operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`] with
//! [`BloomGateError`] as the error type. Errors are raised synchronously and
//! never retried internally.
//!
//! # Error Propagation
//!
//! ```
//! use bloomgate::{BloomGateError, Result};
//! use bloomgate::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn derive(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//!
//! assert_eq!(derive(1000, 0.01).unwrap(), (9586, 7));
//! assert_eq!(derive(0, 0.01), Err(BloomGateError::invalid_item_count(0)));
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BloomGateError>;

/// Errors that can occur while building or using a Bloom filter.
///
/// There are two families:
///
/// - **Invalid argument** (`InvalidItemCount`, `FalsePositiveRateOutOfBounds`,
///   `InvalidFilterSize`, `InvalidHashCount`, `InvalidParameters`): raised at
///   construction, before any bit storage is allocated.
/// - **Strategy contract** (`IndexOutOfBounds`, `InvalidStrategyOutput`): a bit
///   position outside `[0, m)` or a position count other than `k`. Either means
///   a hash strategy does not honor its contract and is an integration defect
///   rather than a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomGateError {
    /// Expected insertion count is zero.
    InvalidItemCount {
        /// The count that was provided.
        count: usize,
    },

    /// False positive rate outside the open interval (0, 1).
    ///
    /// `NaN` also lands here.
    FalsePositiveRateOutOfBounds {
        /// The rate that was provided.
        fp_rate: f64,
    },

    /// Bit count `m` is zero.
    InvalidFilterSize {
        /// The size in bits that was provided.
        size: usize,
    },

    /// Hash round count `k` is below one.
    InvalidHashCount {
        /// The count that was provided.
        count: usize,
    },

    /// Parameters passed validation individually but cannot be realized,
    /// e.g. a derived bit count that does not fit in `usize`.
    InvalidParameters {
        /// Human-readable description of the problem.
        message: String,
    },

    /// Bit access outside `[0, length)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the bit field.
        length: usize,
    },

    /// A hash strategy returned a number of positions other than `k`.
    InvalidStrategyOutput {
        /// Positions the filter asked for (`k`).
        expected: usize,
        /// Positions the strategy returned.
        actual: usize,
    },
}

impl fmt::Display for BloomGateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected insertions must be greater than 0.",
                    count
                )
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be greater than 0.",
                    size
                )
            }
            Self::InvalidHashCount { count } => {
                write!(
                    f,
                    "Invalid hash round count: {}. Must be at least 1.",
                    count
                )
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit field of length {}",
                    index, length
                )
            }
            Self::InvalidStrategyOutput { expected, actual } => {
                write!(
                    f,
                    "Hash strategy returned {} positions, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for BloomGateError {}

impl BloomGateError {
    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize) -> Self {
        Self::InvalidHashCount { count }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// ```
    /// use bloomgate::BloomGateError;
    ///
    /// let err = BloomGateError::invalid_parameters(format!("m={} does not fit", 1u128 << 70));
    /// assert!(err.to_string().contains("does not fit"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create an `InvalidStrategyOutput` error.
    #[must_use]
    pub fn invalid_strategy_output(expected: usize, actual: usize) -> Self {
        Self::InvalidStrategyOutput { expected, actual }
    }

    /// Whether this error rejects a constructor argument.
    ///
    /// ```
    /// use bloomgate::BloomGateError;
    ///
    /// assert!(BloomGateError::invalid_item_count(0).is_invalid_argument());
    /// assert!(!BloomGateError::index_out_of_bounds(10, 5).is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::InvalidStrategyOutput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_item_count() {
        let display = BloomGateError::invalid_item_count(0).to_string();
        assert!(display.contains('0'));
        assert!(display.contains("greater than 0"));
    }

    #[test]
    fn test_display_fp_rate_out_of_bounds() {
        let display = BloomGateError::fp_rate_out_of_bounds(1.5).to_string();
        assert!(display.contains("1.5"));
        assert!(display.contains("out of bounds"));
        assert!(display.contains("(0, 1)"));
    }

    #[test]
    fn test_display_invalid_filter_size() {
        let display = BloomGateError::invalid_filter_size(0).to_string();
        assert!(display.contains("0 bits"));
    }

    #[test]
    fn test_display_invalid_hash_count() {
        let display = BloomGateError::invalid_hash_count(0).to_string();
        assert!(display.contains("at least 1"));
    }

    #[test]
    fn test_display_invalid_parameters() {
        let display = BloomGateError::invalid_parameters("too large").to_string();
        assert!(display.contains("Invalid Bloom filter parameters"));
        assert!(display.ends_with("too large."));
    }

    #[test]
    fn test_display_index_out_of_bounds() {
        let display = BloomGateError::index_out_of_bounds(150, 100).to_string();
        assert!(display.contains("150"));
        assert!(display.contains("100"));
        assert!(display.contains("out of bounds"));
    }

    #[test]
    fn test_invalid_argument_classification() {
        assert!(BloomGateError::invalid_item_count(0).is_invalid_argument());
        assert!(BloomGateError::fp_rate_out_of_bounds(0.0).is_invalid_argument());
        assert!(BloomGateError::invalid_filter_size(0).is_invalid_argument());
        assert!(BloomGateError::invalid_hash_count(0).is_invalid_argument());
        assert!(BloomGateError::invalid_parameters("x").is_invalid_argument());
        assert!(!BloomGateError::index_out_of_bounds(1, 1).is_invalid_argument());
        assert!(!BloomGateError::invalid_strategy_output(3, 0).is_invalid_argument());
    }

    #[test]
    fn test_display_invalid_strategy_output() {
        let display = BloomGateError::invalid_strategy_output(7, 2).to_string();
        assert!(display.contains("returned 2 positions"));
        assert!(display.contains("expected 7"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error> = Box::new(BloomGateError::invalid_hash_count(0));
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BloomGateError::invalid_item_count(0))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert_eq!(outer(), Err(BloomGateError::invalid_item_count(0)));
    }
}
