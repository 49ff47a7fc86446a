//! Builder for [`BloomFilter`].
//!
//! # Type-State Pattern
//!
//! Required parameters are enforced at compile time. The builder progresses
//! through states and `build` only exists once both are set:
//!
//! ```text
//! Initial → WithItems → Complete → BloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! `.hash_strategy()` is optional and may be called in any state.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use bloomgate::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.k(), 7);
//! ```
//!
//! ## Custom Strategy
//!
//! ```
//! use bloomgate::builder::BloomFilterBuilder;
//! use bloomgate::hash::{HashStrategy, Sha512DoubleHashing};
//! use std::sync::Arc;
//!
//! let strategy: Arc<dyn HashStrategy> = Arc::new(Sha512DoubleHashing);
//! let filter = BloomFilterBuilder::new()
//!     .hash_strategy(strategy)
//!     .expected_items(500)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.expected(), 500);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomgate::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::filters::BloomFilter;
use crate::hash::{default_strategy, HashStrategy, Sha512DoubleHashing};

/// Type-state marker: nothing set yet.
pub struct Initial;

/// Type-state marker: expected item count set.
pub struct WithItems;

/// Type-state marker: all required parameters set.
pub struct Complete;

/// Builder for [`BloomFilter`] with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: `Initial`, `WithItems` or `Complete`
/// - `S`: hash strategy, [`Sha512DoubleHashing`] unless replaced
pub struct BloomFilterBuilder<State, S = Sha512DoubleHashing>
where
    S: HashStrategy + ?Sized,
{
    expected_items: usize,
    fp_rate: f64,
    strategy: Arc<S>,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial, Sha512DoubleHashing> {
    /// Start a builder with the default strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: 0,
            fp_rate: f64::NAN,
            strategy: Arc::new(default_strategy()),
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Initial, Sha512DoubleHashing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, S> BloomFilterBuilder<State, S>
where
    S: HashStrategy + ?Sized,
{
    /// Replace the hash strategy. Available in every state.
    #[must_use]
    pub fn hash_strategy<T>(self, strategy: Arc<T>) -> BloomFilterBuilder<State, T>
    where
        T: HashStrategy + ?Sized,
    {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            strategy,
            _state: PhantomData,
        }
    }
}

impl<S> BloomFilterBuilder<Initial, S>
where
    S: HashStrategy + ?Sized,
{
    /// Set the expected number of insertions (required, must be > 0).
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems, S> {
        BloomFilterBuilder {
            expected_items: items,
            fp_rate: self.fp_rate,
            strategy: self.strategy,
            _state: PhantomData,
        }
    }
}

impl<S> BloomFilterBuilder<WithItems, S>
where
    S: HashStrategy + ?Sized,
{
    /// Set the target false positive rate (required, must be in (0, 1)).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, S> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate,
            strategy: self.strategy,
            _state: PhantomData,
        }
    }
}

impl<S> BloomFilterBuilder<Complete, S>
where
    S: HashStrategy + ?Sized,
{
    /// Validate the parameters and construct the filter.
    ///
    /// # Errors
    ///
    /// - [`BloomGateError::InvalidItemCount`](crate::BloomGateError::InvalidItemCount) if the item count is 0
    /// - [`BloomGateError::FalsePositiveRateOutOfBounds`](crate::BloomGateError::FalsePositiveRateOutOfBounds) if the rate is not in (0, 1)
    /// - [`BloomGateError::InvalidParameters`](crate::BloomGateError::InvalidParameters) if the derived size overflows
    pub fn build(self) -> Result<BloomFilter<S>> {
        BloomFilter::with_strategy(self.expected_items, self.fp_rate, self.strategy)
    }
}
