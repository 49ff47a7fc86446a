//! Core building blocks shared by the filter: bit storage and parameter math.
//!
//! ```text
//! core/
//! ├── bitfield.rs  - Fixed-length bit vector
//! ├── params.rs    - Closed-form m / k / false positive calculations
//! └── mod.rs       - This file
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomgate::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! let m = optimal_bit_count(10_000, 0.01).unwrap();
//! let k = optimal_hash_count(m, 10_000).unwrap();
//! assert_eq!((m, k), (95851, 7));
//! ```

pub mod bitfield;
pub mod params;

pub use bitfield::BitField;
pub use params::{
    bits_per_element, calculate_filter_params, false_positive_rate, optimal_bit_count,
    optimal_hash_count,
};
