//! The hash strategy capability and the double hashing combiner.
//!
//! A strategy maps a byte sequence to `k` bit positions in `[0, m)`. Filters
//! depend only on the [`HashStrategy`] trait, so any digest or combination
//! formula that honors the contract can be swapped in.
//!
//! # Double Hashing (Kirsch & Mitzenmacher 2006)
//!
//! From two base hashes `h₁`, `h₂` of a single digest:
//!
//! ```text
//! gᵢ(x) = (h₁(x) + i·h₂(x)) mod m,   i = 0..k
//! ```
//!
//! This behaves like `k` independent hash functions for Bloom filter purposes
//! while paying for exactly one digest per call.

/// Maps a byte sequence to `k` bit positions in `[0, m)`.
///
/// # Contract
///
/// - Returns exactly `k` positions, each `< m`.
/// - Deterministic: identical `(bytes, m, k)` gives an identical sequence.
/// - Stateless from the caller's point of view; one instance may be shared by
///   any number of filters and threads.
///
/// With `m == 0` no position can satisfy the contract; the built-in
/// strategies return an empty `Vec` rather than dividing by zero.
///
/// # Examples
///
/// A custom strategy only needs `hash` and `name`:
///
/// ```
/// use bloomgate::hash::HashStrategy;
///
/// struct Modulo;
///
/// impl HashStrategy for Modulo {
///     fn hash(&self, bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
///         let base = bytes.iter().map(|&b| b as usize).sum::<usize>();
///         (0..k).map(|i| (base + i) % m).collect()
///     }
///
///     fn name(&self) -> &'static str {
///         "Modulo"
///     }
/// }
///
/// assert_eq!(Modulo.hash(b"ab", 10, 3), vec![5, 6, 7]);
/// ```
pub trait HashStrategy: Send + Sync {
    /// Compute `k` bit positions for `bytes` in a filter of `m` bits.
    fn hash(&self, bytes: &[u8], m: usize, k: usize) -> Vec<usize>;

    /// Human-readable strategy name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Reduce a big-endian unsigned integer of arbitrary width modulo `m`.
///
/// Horner's rule over bytes: `r < m ≤ 2⁶⁴` keeps `r × 256 + 255` well inside
/// `u128`, so the reduction is exact for any input length.
#[inline]
pub(crate) fn reduce_be(bytes: &[u8], m: usize) -> u128 {
    let m = m as u128;
    bytes
        .iter()
        .fold(0u128, |r, &b| ((r << 8) | u128::from(b)) % m)
}

/// Produce `(h1 + i·h2) mod m` for `i` in `0..k`.
///
/// `h1` and `h2` must already be reduced modulo `m`. Since
/// `(h1 + i·h2) mod m` equals `(h1 + i·(h2 mod m)) mod m`, stepping by
/// `h2` and reducing each round yields exactly the positions of the
/// unreduced formula.
#[inline]
pub(crate) fn double_hashing(h1: u128, h2: u128, m: usize, k: usize) -> Vec<usize> {
    let m = m as u128;
    debug_assert!(h1 < m && h2 < m);

    let mut position = h1;
    let mut positions = Vec::with_capacity(k);
    for _ in 0..k {
        positions.push(position as usize);
        position = (position + h2) % m;
    }
    positions
}
