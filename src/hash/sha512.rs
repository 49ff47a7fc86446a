//! SHA-512 double hashing strategy.
//!
//! One SHA-512 digest per call is split into two 256-bit halves. Each half is
//! read as a big-endian unsigned integer and the halves feed the double
//! hashing combiner as `h₁` and `h₂`:
//!
//! ```text
//! digest = SHA-512(bytes)            64 bytes
//! h₁     = digest[0..32]   as u256   big-endian
//! h₂     = digest[32..64]  as u256   big-endian
//! gᵢ     = (h₁ + i·h₂) mod m
//! ```
//!
//! Positions are identical to evaluating the formula with arbitrary precision
//! integers, because both halves are reduced modulo `m` before combining.

use sha2::{Digest, Sha512};

use super::strategy::{double_hashing, reduce_be, HashStrategy};

const HALF: usize = 32;

/// Default strategy: SHA-512 digest, Kirsch–Mitzenmacher double hashing.
///
/// # Examples
///
/// ```
/// use bloomgate::hash::{HashStrategy, Sha512DoubleHashing};
///
/// let strategy = Sha512DoubleHashing;
/// let positions = strategy.hash(b"hello", 1000, 7);
/// assert_eq!(positions.len(), 7);
/// assert!(positions.iter().all(|&p| p < 1000));
/// assert_eq!(positions, strategy.hash(b"hello", 1000, 7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha512DoubleHashing;

impl HashStrategy for Sha512DoubleHashing {
    fn hash(&self, bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
        if m == 0 {
            return Vec::new();
        }

        let digest = Sha512::digest(bytes);
        let (high, low) = digest.split_at(HALF);

        let h1 = reduce_be(high, m);
        let h2 = reduce_be(low, m);
        double_hashing(h1, h2, m, k)
    }

    fn name(&self) -> &'static str {
        "Sha512DoubleHashing"
    }
}
