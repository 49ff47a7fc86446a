//! Hash strategies: byte sequences in, `k` bit positions out.
//!
//! # Available Strategies
//!
//! | Strategy              | Digest     | Feature  | Use Case                      |
//! |-----------------------|------------|----------|-------------------------------|
//! | `Sha512DoubleHashing` | SHA-512    | always   | Default; adversarial inputs   |
//! | `Xxh3DoubleHashing`   | XXH3-128   | `xxhash` | Trusted inputs, lower latency |
//!
//! Both compute a single digest per call regardless of `k` and derive the
//! positions with double hashing.
//!
//! # Sharing
//!
//! Strategies are stateless and `Send + Sync`. Filters hold them behind an
//! `Arc`, so one instance can serve many filters:
//!
//! ```
//! use bloomgate::hash::{HashStrategy, Sha512DoubleHashing};
//! use bloomgate::BloomFilter;
//! use std::sync::Arc;
//!
//! let strategy: Arc<dyn HashStrategy> = Arc::new(Sha512DoubleHashing);
//! let users = BloomFilter::with_strategy(1_000, 0.01, Arc::clone(&strategy)).unwrap();
//! let orders = BloomFilter::with_strategy(5_000, 0.001, Arc::clone(&strategy)).unwrap();
//! assert_eq!(users.hash_strategy().name(), orders.hash_strategy().name());
//! ```

pub mod sha512;
pub mod strategy;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxh3;

pub use sha512::Sha512DoubleHashing;
pub use strategy::HashStrategy;

#[cfg(feature = "xxhash")]
pub use xxh3::Xxh3DoubleHashing;

/// The strategy filters use when none is given.
#[must_use]
pub fn default_strategy() -> Sha512DoubleHashing {
    Sha512DoubleHashing
}
