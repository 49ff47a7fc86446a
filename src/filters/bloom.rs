//! Thread-safe Bloom filter guarded by a single filter-wide lock.
//!
//! # Algorithm
//!
//! - **add**: hash the item once, derive `k` positions, set each bit.
//! - **contains**: derive the same `k` positions, report whether all are set.
//!
//! No false negatives: an item passed to `add` is always reported by
//! `contains` on the same filter. False positives happen at a rate given by
//! [`BloomFilter::false_positive_probability`].
//!
//! # Concurrency Model
//!
//! Each `add` and `contains` holds one `parking_lot::Mutex` for the whole
//! operation: digest, position derivation and all `k` bit accesses. A
//! `contains` therefore never sees half of an `add`:
//!
//! ```text
//! Thread A (add):             Thread B (contains):
//! ───────────────             ────────────────────
//! lock                        lock  (blocks until A releases)
//! positions = hash(item)      positions = hash(item)
//! set bit[p0..pk]             get bit[p0..pk]
//! size += 1                   unlock
//! unlock
//! ```
//!
//! A query sees either none or all of a concurrent add's bits. Waiters block
//! without timeout; hold times are O(k). Separate filters never contend.
//!
//! Parameters (`m`, `k`, `expected`, strategy) are immutable and read without
//! locking.
//!
//! # Examples
//!
//! ```
//! use bloomgate::BloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = Arc::new(BloomFilter::new(10_000, 0.01)?);
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|tid| {
//!         let f = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..1000 {
//!                 f.add(&format!("item-{}-{}", tid, i)).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(filter.size(), 4000);
//! assert!(filter.contains("item-0-42")?);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::cast_precision_loss)]

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::bitfield::BitField;
use crate::core::params;
use crate::error::{BloomGateError, Result};
use crate::hash::{default_strategy, HashStrategy, Sha512DoubleHashing};

/// Mutable part of a filter; always accessed under the filter lock.
#[derive(Debug)]
struct FilterState {
    bits: BitField,
    /// Number of `add` calls, duplicates included.
    size: u64,
}

/// Point-in-time view of a filter, taken under a single lock acquisition.
///
/// # Examples
///
/// ```
/// use bloomgate::BloomFilter;
///
/// let filter = BloomFilter::new(1000, 0.01).unwrap();
/// filter.add_all(["a", "b", "c"]).unwrap();
///
/// let stats = filter.stats();
/// assert_eq!(stats.size, 3);
/// assert_eq!(stats.m, 9586);
/// assert!(stats.set_bits <= 3 * stats.k);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStats {
    /// Bits in the filter.
    pub m: usize,
    /// Hash rounds per operation.
    pub k: usize,
    /// Capacity hint given at construction.
    pub expected: usize,
    /// `add` calls so far.
    pub size: u64,
    /// Bits currently set.
    pub set_bits: usize,
    /// `set_bits / m`.
    pub fill_rate: f64,
    /// Closed-form false positive rate at the current `size`.
    pub expected_fpr: f64,
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={} k={} size={}/{} fill {:.1}% fpr {:.6}",
            self.m,
            self.k,
            self.size,
            self.expected,
            self.fill_rate * 100.0,
            self.expected_fpr
        )
    }
}

/// Bloom filter over byte sequences with a pluggable hash strategy.
///
/// # Type Parameters
///
/// * `S` - Hash strategy. Defaults to [`Sha512DoubleHashing`]; may be
///   `dyn HashStrategy` to choose the strategy at runtime.
///
/// # Invariants
///
/// `m > 0`, `k >= 1`, the bit field holds exactly `m` bits, and no operation
/// ever clears a bit.
pub struct BloomFilter<S = Sha512DoubleHashing>
where
    S: HashStrategy + ?Sized,
{
    m: usize,
    k: usize,
    expected: usize,
    strategy: Arc<S>,
    state: Mutex<FilterState>,
}

impl BloomFilter<Sha512DoubleHashing> {
    /// Create a filter sized for `expected` insertions at target false
    /// positive rate `fpr`, using SHA-512 double hashing.
    ///
    /// Derives `m = ⌈-expected × ln(fpr) / (ln 2)²⌉` and
    /// `k = ⌈ln 2 × m / expected⌉`.
    ///
    /// # Errors
    ///
    /// - [`BloomGateError::InvalidItemCount`] if `expected == 0`
    /// - [`BloomGateError::FalsePositiveRateOutOfBounds`] if `fpr` not in (0, 1)
    /// - [`BloomGateError::InvalidParameters`] if the derived `m` overflows or
    ///   cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomgate::BloomFilter;
    ///
    /// let filter = BloomFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.m(), 9586);
    /// assert_eq!(filter.k(), 7);
    ///
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(10, 1.5).is_err());
    /// ```
    pub fn new(expected: usize, fpr: f64) -> Result<Self> {
        Self::with_strategy(expected, fpr, Arc::new(default_strategy()))
    }
}

impl<S> BloomFilter<S>
where
    S: HashStrategy + ?Sized,
{
    /// Create a filter sized for `expected` insertions at rate `fpr` with a
    /// caller-supplied strategy.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_strategy(expected: usize, fpr: f64, strategy: Arc<S>) -> Result<Self> {
        let (m, k) = params::calculate_filter_params(expected, fpr)?;
        Self::with_params(m, k, strategy, expected)
    }

    /// Create a filter with explicit `m` and `k`, skipping derivation.
    ///
    /// `expected` is recorded for statistics only.
    ///
    /// # Errors
    ///
    /// - [`BloomGateError::InvalidFilterSize`] if `m == 0`
    /// - [`BloomGateError::InvalidHashCount`] if `k == 0`
    /// - [`BloomGateError::InvalidParameters`] if `m` bits cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomgate::BloomFilter;
    /// use bloomgate::hash::Sha512DoubleHashing;
    /// use std::sync::Arc;
    ///
    /// let filter = BloomFilter::with_params(4096, 3, Arc::new(Sha512DoubleHashing), 500).unwrap();
    /// assert_eq!((filter.m(), filter.k(), filter.expected()), (4096, 3, 500));
    /// ```
    pub fn with_params(m: usize, k: usize, strategy: Arc<S>, expected: usize) -> Result<Self> {
        if m == 0 {
            return Err(BloomGateError::invalid_filter_size(m));
        }
        if k == 0 {
            return Err(BloomGateError::invalid_hash_count(k));
        }

        let bits = BitField::new(m)?;

        tracing::debug!(
            m,
            k,
            expected,
            strategy = strategy.name(),
            "created bloom filter"
        );

        Ok(Self {
            m,
            k,
            expected,
            strategy,
            state: Mutex::new(FilterState { bits, size: 0 }),
        })
    }

    /// Derive and validate the `k` positions for `bytes`.
    fn positions(&self, bytes: &[u8]) -> Result<Vec<usize>> {
        let positions = self.strategy.hash(bytes, self.m, self.k);

        if positions.len() != self.k {
            tracing::warn!(
                expected = self.k,
                actual = positions.len(),
                strategy = self.strategy.name(),
                "hash strategy produced wrong number of positions"
            );
            return Err(BloomGateError::invalid_strategy_output(self.k, positions.len()));
        }

        if let Some(&index) = positions.iter().find(|&&p| p >= self.m) {
            tracing::warn!(
                index,
                m = self.m,
                strategy = self.strategy.name(),
                "hash strategy produced out-of-range position"
            );
            return Err(BloomGateError::index_out_of_bounds(index, self.m));
        }

        Ok(positions)
    }

    /// Record an item.
    ///
    /// Sets the item's `k` bits and increments [`size`](Self::size). Adding an
    /// item twice leaves the bits unchanged but still counts.
    ///
    /// # Errors
    ///
    /// Returns [`BloomGateError::IndexOutOfBounds`] if the strategy produces a
    /// position outside `[0, m)`, or [`BloomGateError::InvalidStrategyOutput`]
    /// if it produces other than `k` positions. Positions are checked before
    /// any bit is set, so the filter is unchanged on error.
    pub fn add<B>(&self, item: &B) -> Result<()>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        let mut state = self.state.lock();
        let positions = self.positions(item.as_ref())?;

        for index in positions {
            state.bits.set(index)?;
        }
        state.size += 1;

        tracing::trace!(size = state.size, "bloom filter add");
        Ok(())
    }

    /// Record every item of `items`.
    ///
    /// Each item is added atomically; the batch as a whole is not. Stops at
    /// the first error, leaving earlier items recorded.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_all<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for item in items {
            self.add(item.as_ref())?;
        }
        Ok(())
    }

    /// Test whether an item may have been added.
    ///
    /// - `Ok(false)`: the item was definitely never added
    /// - `Ok(true)`: the item was probably added (or a false positive)
    ///
    /// # Errors
    ///
    /// Returns [`BloomGateError::IndexOutOfBounds`] if the strategy produces a
    /// position outside `[0, m)`, or [`BloomGateError::InvalidStrategyOutput`]
    /// if it produces other than `k` positions.
    pub fn contains<B>(&self, item: &B) -> Result<bool>
    where
        B: AsRef<[u8]> + ?Sized,
    {
        let state = self.state.lock();
        let positions = self.positions(item.as_ref())?;

        for index in positions {
            if !state.bits.get(index)? {
                tracing::trace!("bloom filter miss");
                return Ok(false);
            }
        }

        tracing::trace!("bloom filter hit");
        Ok(true)
    }

    /// Query many items; one answer per item in input order.
    ///
    /// Each query is atomic with respect to concurrent `add`s.
    ///
    /// # Errors
    ///
    /// See [`contains`](Self::contains).
    pub fn contains_all<I>(&self, items: I) -> Result<Vec<bool>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|item| self.contains(item.as_ref()))
            .collect()
    }

    /// Closed-form false positive rate after `inserted` insertions:
    /// `(1 - e^(-k × inserted / m))^k`.
    ///
    /// Depends only on `m`, `k` and the argument, not on the bits.
    #[must_use]
    pub fn false_positive_probability(&self, inserted: u64) -> f64 {
        params::false_positive_rate(self.m, self.k, inserted)
    }

    /// Closed-form false positive rate at the current [`size`](Self::size).
    #[must_use]
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.false_positive_probability(self.size())
    }

    /// Number of `add` calls so far, duplicates included.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.state.lock().size
    }

    /// Total bits (`m`).
    #[must_use]
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Hash rounds per operation (`k`).
    #[must_use]
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Capacity hint given at construction.
    #[must_use]
    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The shared hash strategy. Clone the `Arc` to reuse it in another filter.
    #[must_use]
    #[inline]
    pub fn hash_strategy(&self) -> &Arc<S> {
        &self.strategy
    }

    /// Bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.state.lock().bits.count_ones()
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.m as f64
    }

    /// Snapshot of parameters and occupancy.
    #[must_use]
    pub fn stats(&self) -> FilterStats {
        let state = self.state.lock();
        let set_bits = state.bits.count_ones();

        FilterStats {
            m: self.m,
            k: self.k,
            expected: self.expected,
            size: state.size,
            set_bits,
            fill_rate: set_bits as f64 / self.m as f64,
            expected_fpr: params::false_positive_rate(self.m, self.k, state.size),
        }
    }

    /// Approximate bytes held by this filter, excluding the shared strategy.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.state.lock().bits.memory_usage()
    }
}

impl<S> fmt::Debug for BloomFilter<S>
where
    S: HashStrategy + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("m", &self.m)
            .field("k", &self.k)
            .field("expected", &self.expected)
            .field("strategy", &self.strategy.name())
            .field("size", &self.size())
            .finish()
    }
}
