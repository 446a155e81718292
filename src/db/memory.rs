// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volatile in-process run store.

use crate::db::{RunStore, StoreError};
use crate::models::RunRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Run store backed by a `Vec` in process memory. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRunStore {
    runs: Mutex<Vec<RunRecord>>,
}

impl InMemoryRunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored runs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed element,
    // so a poisoned vector is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<RunRecord>> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RunStore for InMemoryRunStore {
    fn record(&self, run: RunRecord) -> Result<(), StoreError> {
        self.lock().push(run);
        Ok(())
    }

    fn all_runs(&self) -> Result<Vec<RunRecord>, StoreError> {
        Ok(self.lock().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Duration;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn run(day: u32, km: f64) -> RunRecord {
        RunRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            km,
            Duration::new(0, 30, 0),
        )
    }

    #[test]
    fn test_empty_store_returns_empty_list() {
        let store = InMemoryRunStore::new();
        assert!(store.all_runs().unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let store = InMemoryRunStore::new();
        let runs = vec![run(3, 5.0), run(1, 10.0), run(2, 7.5)];

        for r in &runs {
            store.record(r.clone()).unwrap();
        }

        assert_eq!(store.all_runs().unwrap(), runs);
    }

    #[test]
    fn test_last_recorded_is_last_element() {
        let store = InMemoryRunStore::new();
        store.record(run(1, 5.0)).unwrap();
        store.record(run(2, 6.0)).unwrap();

        let latest = run(3, 42.195);
        store.record(latest.clone()).unwrap();

        assert_eq!(store.all_runs().unwrap().last(), Some(&latest));
    }

    #[test]
    fn test_accepts_invalid_distance_and_duplicates() {
        let store = InMemoryRunStore::new();
        store.record(run(1, 0.0)).unwrap();
        store.record(run(1, -10.0)).unwrap();
        store.record(run(1, -10.0)).unwrap();

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let store = Arc::new(InMemoryRunStore::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        store.record(run(1, (t * PER_THREAD + i) as f64)).unwrap();
                        // Interleave readers with writers
                        let _ = store.all_runs().unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        assert_eq!(store.len(), THREADS * PER_THREAD);
    }
}
