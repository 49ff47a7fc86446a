//! bloomgate: a thread-safe Bloom filter for deduplication gates.
//!
//! A Bloom filter answers "have I seen this item before?" in constant space:
//! - **False positives**: possible, at a rate chosen at construction
//! - **False negatives**: never; an added item is always reported as present
//!
//! It is typically placed in front of an expensive, storage-backed
//! deduplication check: a negative answer skips the check entirely.
//!
//! # Quick Start
//!
//! ```
//! use bloomgate::BloomFilter;
//!
//! // 1,000 expected items at a 1% false positive rate
//! let filter = BloomFilter::new(1_000, 0.01).unwrap();
//! assert_eq!((filter.m(), filter.k()), (9586, 7));
//!
//! filter.add("hello").unwrap();
//! filter.add(b"raw bytes").unwrap();
//!
//! assert!(filter.contains("hello").unwrap());
//! assert!(!filter.contains("goodbye").unwrap());
//! assert_eq!(filter.size(), 2);
//! ```
//!
//! # Components
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`hash`]     | `HashStrategy` trait, SHA-512 and XXH3 double hashing      |
//! | [`core`]     | `BitField` storage and closed-form parameter math          |
//! | [`filters`]  | `BloomFilter` and `FilterStats`                            |
//! | [`builder`]  | Type-state `BloomFilterBuilder`                            |
//! | [`error`]    | `BloomGateError` and `Result`                              |
//!
//! Data flows `BloomFilter::add/contains → HashStrategy::hash → k positions →
//! BitField::set/get`.
//!
//! # Concurrency
//!
//! `BloomFilter` methods take `&self`. Each `add` and `contains` holds one
//! filter-wide mutex for the whole operation, so a query never observes a
//! partially applied insertion. Share a filter across threads with `Arc`:
//!
//! ```
//! use bloomgate::BloomFilter;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(BloomFilter::new(10_000, 0.01).unwrap());
//! let f = Arc::clone(&filter);
//! std::thread::spawn(move || f.add("from a thread").unwrap())
//!     .join()
//!     .unwrap();
//! assert!(filter.contains("from a thread").unwrap());
//! ```
//!
//! # Features
//!
//! - `xxhash` (default) - [`hash::Xxh3DoubleHashing`], a non-cryptographic strategy
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (construction at `debug`, per-operation at
//! `trace`, strategy contract violations at `warn`). No subscriber is installed.
//!
//! # Not Supported
//!
//! Removal, resizing, persistence and sharding are outside the scope of this
//! crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit storage and parameter calculations
pub mod core;

/// Error types and result alias
pub mod error;

/// Filter implementations
pub mod filters;

/// Hash strategies
pub mod hash;

/// Type-safe builders
pub mod builder;

pub use builder::BloomFilterBuilder;
pub use error::{BloomGateError, Result};
pub use filters::{BloomFilter, FilterStats};
pub use hash::{HashStrategy, Sha512DoubleHashing};

#[cfg(feature = "xxhash")]
pub use hash::Xxh3DoubleHashing;

/// Prelude module for convenient imports.
///
/// ```
/// use bloomgate::prelude::*;
///
/// let filter = BloomFilterBuilder::new()
///     .expected_items(100)
///     .false_positive_rate(0.01)
///     .build()
///     .unwrap();
/// filter.add("x").unwrap();
/// assert!(filter.contains("x").unwrap());
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::error::{BloomGateError, Result};
    pub use crate::filters::{BloomFilter, FilterStats};
    pub use crate::hash::{HashStrategy, Sha512DoubleHashing};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::Xxh3DoubleHashing;
}
