// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run storage layer.
//!
//! [`RunStore`] is the capability set every backend provides. The service
//! only ever talks to `Arc<dyn RunStore>`, so backends can be swapped
//! without touching the model or the ingestion path.

pub mod file;
pub mod memory;

pub use file::FileRunStore;
pub use memory::InMemoryRunStore;

use crate::models::RunRecord;

/// Persists and retrieves run records in insertion order.
///
/// Implementations must make `record` and `all_runs` mutually exclusive:
/// no lost appends between concurrent writers, no torn reads.
pub trait RunStore: Send + Sync {
    /// Append a run. Never rejects a record because of its contents.
    fn record(&self, run: RunRecord) -> Result<(), StoreError>;

    /// Every stored run, oldest first. Empty store yields an empty vector.
    fn all_runs(&self) -> Result<Vec<RunRecord>, StoreError>;
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
