//! Fixed-length bit field backing a Bloom filter.
//!
//! `BitField` is a plain (non-atomic) bit array packed into 64-bit words.
//! Mutation takes `&mut self`; the owning filter serializes access with its own
//! lock, so the field needs no synchronization of its own.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomgate::core::BitField;
//!
//! let mut bits = BitField::new(100).unwrap();
//! bits.set(42).unwrap();
//! assert!(bits.get(42).unwrap());
//! assert!(!bits.get(43).unwrap());
//! assert!(bits.get(100).is_err());
//! ```

use crate::error::{BloomGateError, Result};

const WORD_BITS: usize = 64;

/// Fixed-length vector of bits, all initially unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitField {
    words: Box<[u64]>,
    len: usize,
}

impl BitField {
    /// Create a bit field of `len` bits, all zero.
    ///
    /// # Errors
    ///
    /// - [`BloomGateError::InvalidFilterSize`] if `len == 0`
    /// - [`BloomGateError::InvalidParameters`] if the word storage cannot be
    ///   allocated
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BloomGateError::invalid_filter_size(len));
        }

        let num_words = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words.try_reserve_exact(num_words).map_err(|err| {
            BloomGateError::invalid_parameters(format!(
                "cannot allocate {} bits: {}",
                len, err
            ))
        })?;
        words.resize(num_words, 0u64);

        Ok(Self {
            words: words.into_boxed_slice(),
            len,
        })
    }

    /// Number of bits in the field.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a successfully constructed field.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn locate(&self, index: usize) -> Result<(usize, u64)> {
        if index >= self.len {
            return Err(BloomGateError::index_out_of_bounds(index, self.len));
        }
        Ok((index / WORD_BITS, 1u64 << (index % WORD_BITS)))
    }

    /// Set bit `index` to 1. Setting an already-set bit is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BloomGateError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<()> {
        let (word, mask) = self.locate(index)?;
        self.words[word] |= mask;
        Ok(())
    }

    /// Read bit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomGateError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        let (word, mask) = self.locate(index)?;
        Ok(self.words[word] & mask != 0)
    }

    /// Reset bit `index` to 0.
    ///
    /// Bloom filters never call this; it exists so the field is usable as a
    /// general bit vector.
    ///
    /// # Errors
    ///
    /// Returns [`BloomGateError::IndexOutOfBounds`] if `index >= len`.
    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        let (word, mask) = self.locate(index)?;
        self.words[word] &= !mask;
        Ok(())
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Heap bytes used by the word storage.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}
