// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run ingestion service.
//!
//! Handles the two request kinds:
//! 1. Submit: decode a JSON payload into a run and append it to the store
//! 2. List: return every stored run, oldest first

use crate::db::{RunStore, StoreError};
use crate::models::RunRecord;
use std::sync::Arc;

/// Stateless dispatcher between the HTTP layer and a [`RunStore`].
#[derive(Clone)]
pub struct RunIngestionService {
    store: Arc<dyn RunStore>,
}

impl RunIngestionService {
    pub fn new(store: Arc<dyn RunStore>) -> Self {
        Self { store }
    }

    /// Decode and store a submitted run.
    ///
    /// The store is untouched when the payload does not decode.
    pub fn submit(&self, payload: &[u8]) -> Result<(), IngestError> {
        let run: RunRecord = serde_json::from_slice(payload).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed run payload");
            IngestError::MalformedInput(e.to_string())
        })?;

        tracing::info!(
            date = %run.formatted_date(),
            distance = %run.formatted_distance(),
            duration = %run.duration(),
            pace = %run.pace(),
            "Recording run"
        );

        self.store.record(run)?;
        Ok(())
    }

    /// All recorded runs in insertion order.
    pub fn list(&self) -> Result<Vec<RunRecord>, IngestError> {
        let runs = self.store.all_runs()?;
        tracing::debug!(count = runs.len(), "Listing runs");
        Ok(runs)
    }
}

/// Ingestion errors
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Malformed run payload: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
