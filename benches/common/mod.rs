//! Data generators and constants shared by the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::collections::HashSet;

/// Filter capacities, from cache-resident to RAM-resident bit fields.
pub const SIZES: &[usize] = &[
    1_000,     // ~1.2 KB
    10_000,    // ~12 KB
    100_000,   // ~120 KB
    1_000_000, // ~1.2 MB
];

/// Target false positive rates. Lower rates mean larger `k`.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Thread counts for contention benchmarks.
pub const THREAD_COUNTS: &[usize] = &[1, 2, 4, 8];

/// Random alphanumeric string of `len` bytes.
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `count` independent random strings of `len` bytes.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Message-id shaped keys, the typical deduplication workload.
pub fn generate_message_ids(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| format!("msg-{}@{}", random_string(20), random_string(8)))
        .collect()
}

/// Two disjoint sets: `(present, absent)`.
pub fn create_disjoint_sets(
    present_count: usize,
    absent_count: usize,
    item_size: usize,
) -> (Vec<String>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut present = Vec::with_capacity(present_count);
    let mut absent = Vec::with_capacity(absent_count);

    while present.len() < present_count {
        let item = random_string(item_size);
        if seen.insert(item.clone()) {
            present.push(item);
        }
    }

    while absent.len() < absent_count {
        let item = random_string(item_size);
        if seen.insert(item.clone()) {
            absent.push(item);
        }
    }

    (present, absent)
}
