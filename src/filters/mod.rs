//! Filter implementations.
//!
//! | Filter        | Concurrency                  | Removal | Resizing |
//! |---------------|------------------------------|---------|----------|
//! | `BloomFilter` | One mutex per filter (`&self`) | No    | No       |
//!
//! See [`bloom`] for the algorithm and locking model.

pub mod bloom;

pub use bloom::{BloomFilter, FilterStats};
