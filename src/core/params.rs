//! Optimal parameter calculation for Bloom filters.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: expected number of insertions
//! - `ε`: target false positive rate
//!
//! Parameters:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈ln 2 × m / n⌉` (hash rounds)
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! Both `m` and `k` are rounded up and never clamped, so the derived values are
//! exactly the closed forms above. For `n = 1000, ε = 0.01` that is
//! `m = 9586, k = 7`.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomGateError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Check that `fp_rate` lies in the open interval (0, 1).
///
/// Written as a positive range test so that `NaN` is rejected too.
#[inline]
pub(crate) fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    if fp_rate > 0.0 && fp_rate < 1.0 {
        Ok(())
    } else {
        Err(BloomGateError::fp_rate_out_of_bounds(fp_rate))
    }
}

/// Calculate the number of bits for `n` insertions at target rate `fp_rate`.
///
/// Implements `m = ⌈-n × ln(ε) / (ln 2)²⌉`.
///
/// # Errors
///
/// - [`BloomGateError::InvalidItemCount`] if `n == 0`
/// - [`BloomGateError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`BloomGateError::InvalidParameters`] if the result does not fit in `usize`
///
/// # Examples
///
/// ```
/// use bloomgate::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert_eq!(optimal_bit_count(1, 0.5).unwrap(), 2);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(BloomGateError::invalid_item_count(n));
    }
    validate_fp_rate(fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    // usize::MAX as f64 rounds up to 2^64, so `>=` is the exact overflow test
    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(BloomGateError::invalid_parameters(format!(
            "derived filter size {:.0} bits exceeds usize::MAX for n={} and fp_rate={}",
            m, n, fp_rate
        )));
    }

    Ok((m as usize).max(1))
}

/// Calculate the number of hash rounds for a filter of `m` bits sized for `n`
/// insertions.
///
/// Implements `k = ⌈ln 2 × m / n⌉`, with a floor of one round.
///
/// # Errors
///
/// - [`BloomGateError::InvalidFilterSize`] if `m == 0`
/// - [`BloomGateError::InvalidItemCount`] if `n == 0`
///
/// # Examples
///
/// ```
/// use bloomgate::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(10, 1000).unwrap(), 1);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(BloomGateError::invalid_filter_size(m));
    }
    if n == 0 {
        return Err(BloomGateError::invalid_item_count(n));
    }

    let k = (LN_2 * m as f64 / n as f64).ceil() as usize;
    Ok(k.max(1))
}

/// Derive `(m, k)` for `n` insertions at target rate `fp_rate`.
///
/// # Errors
///
/// See [`optimal_bit_count`].
///
/// # Examples
///
/// ```
/// use bloomgate::core::params::calculate_filter_params;
///
/// assert_eq!(calculate_filter_params(1000, 0.01).unwrap(), (9586, 7));
/// ```
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_hash_count(m, n)?;
    Ok((m, k))
}

/// Expected false positive rate of an `m`-bit, `k`-round filter after
/// `inserted` insertions: `(1 - e^(-k × inserted / m))^k`.
///
/// This is a pure function of its inputs. With `m == 0` or `k == 0` there is no
/// meaningful filter and the result is `1.0` and `0.0` respectively, matching
/// the limits of the formula.
///
/// # Examples
///
/// ```
/// use bloomgate::core::params::false_positive_rate;
///
/// let p = false_positive_rate(9586, 7, 1000);
/// assert!((p - 0.01).abs() < 0.001);
/// assert_eq!(false_positive_rate(9586, 7, 0), 0.0);
/// ```
#[must_use]
pub fn false_positive_rate(m: usize, k: usize, inserted: u64) -> f64 {
    if m == 0 {
        return 1.0;
    }
    if k == 0 || inserted == 0 {
        return 0.0;
    }

    let k_f64 = k as f64;
    let exponent = -(k_f64 * inserted as f64) / m as f64;
    let prob_bit_one = 1.0 - exponent.exp();

    prob_bit_one.powf(k_f64).clamp(0.0, 1.0)
}

/// Bits per element needed for a target false positive rate:
/// `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// Returns [`BloomGateError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1).
///
/// # Examples
///
/// ```
/// use bloomgate::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.585).abs() < 0.01);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    validate_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}
