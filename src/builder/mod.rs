//! Type-safe builder for Bloom filter construction.
//!
//! Builders use the type-state pattern: forgetting a required parameter is a
//! compile error, while out-of-range values are reported by `build()` as
//! runtime errors.
//!
//! | Builder              | Required Parameters | Optional        |
//! |----------------------|---------------------|-----------------|
//! | `BloomFilterBuilder` | items, fp_rate      | `hash_strategy` |

pub mod bloom;

pub use bloom::BloomFilterBuilder;
