//! XXH3-128 double hashing strategy (requires the `xxhash` feature).
//!
//! A non-cryptographic alternative to [`Sha512DoubleHashing`](super::Sha512DoubleHashing)
//! for inputs that are not adversarial. The 128-bit XXH3 digest is split into
//! its high and low 64-bit halves, which serve as `h₁` and `h₂` for the same
//! `(h₁ + i·h₂) mod m` combination.
//!
//! Positions differ from the SHA-512 strategy, so two filters can only be
//! compared if they were built with the same strategy.

use xxhash_rust::xxh3::xxh3_128;

use super::strategy::{double_hashing, HashStrategy};

/// XXH3-128 digest with Kirsch–Mitzenmacher double hashing.
///
/// # Examples
///
/// ```
/// use bloomgate::hash::{HashStrategy, Xxh3DoubleHashing};
///
/// let positions = Xxh3DoubleHashing.hash(b"hello", 1000, 7);
/// assert_eq!(positions.len(), 7);
/// assert!(positions.iter().all(|&p| p < 1000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3DoubleHashing;

impl HashStrategy for Xxh3DoubleHashing {
    fn hash(&self, bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
        if m == 0 {
            return Vec::new();
        }

        let digest = xxh3_128(bytes);
        let modulus = m as u128;

        let h1 = (digest >> 64) % modulus;
        let h2 = (digest & u128::from(u64::MAX)) % modulus;
        double_hashing(h1, h2, m, k)
    }

    fn name(&self) -> &'static str {
        "Xxh3DoubleHashing"
    }
}
