// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track My Run: log personal runs and see your pace
//!
//! This crate provides the run model (distance, time, pace), pluggable
//! run storage and the HTTP API for submitting and listing runs.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{FileRunStore, InMemoryRunStore, RunStore};
use services::RunIngestionService;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub ingestion: RunIngestionService,
}

impl AppState {
    /// Build state with the store selected by `config`.
    pub fn from_config(config: Config) -> Self {
        let store: Arc<dyn RunStore> = match &config.store_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file run store");
                Arc::new(FileRunStore::new(path))
            }
            None => {
                tracing::info!("Using in-memory run store");
                Arc::new(InMemoryRunStore::new())
            }
        };

        Self::with_store(config, store)
    }

    /// Build state around an existing store.
    pub fn with_store(config: Config, store: Arc<dyn RunStore>) -> Self {
        Self {
            config,
            ingestion: RunIngestionService::new(store),
        }
    }
}
