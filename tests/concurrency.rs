//! Concurrent access to one shared filter.

use bloomgate::BloomFilter;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 2_000;

#[test]
fn test_concurrent_adds_are_all_counted() {
    let filter = Arc::new(BloomFilter::new(THREADS * PER_THREAD, 0.01).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let filter = Arc::clone(&filter);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    filter.add(&format!("t{}-item{}", t, i)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(filter.size(), (THREADS * PER_THREAD) as u64);
    for t in 0..THREADS {
        for i in 0..PER_THREAD {
            let item = format!("t{}-item{}", t, i);
            assert!(filter.contains(&item).unwrap(), "lost {}", item);
        }
    }
}

#[test]
fn test_readers_see_complete_adds() {
    let filter = Arc::new(BloomFilter::new(10_000, 0.01).unwrap());
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let filter = Arc::clone(&filter);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..5_000 {
                filter.add(&format!("w{}", i)).unwrap();
            }
        })
    };

    let reader = {
        let filter = Arc::clone(&filter);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            // Once size says an add finished, that item must be visible.
            let mut checked = 0;
            while checked < 5_000 {
                let size = filter.size() as usize;
                while checked < size {
                    let item = format!("w{}", checked);
                    assert!(filter.contains(&item).unwrap(), "{} not visible", item);
                    checked += 1;
                }
                thread::yield_now();
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}

#[test]
fn test_independent_filters_from_many_threads() {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let filter = BloomFilter::new(1_000, 0.01).unwrap();
                for i in 0..1_000 {
                    filter.add(&format!("{}:{}", t, i)).unwrap();
                }
                filter.size()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1_000);
    }
}
