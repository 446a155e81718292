// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PAGE_TITLE: &str = "My Latest Runs";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// JSON-lines file backing the run store; in-memory when unset
    pub store_path: Option<PathBuf>,
    /// Title of the HTML run listing
    pub page_title: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_path = match env::var("RUN_STORE_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    name: "RUN_STORE_PATH",
                    reason: "must not be blank".to_string(),
                })
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            store_path,
            page_title: env::var("PAGE_TITLE")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
        })
    }

    /// Fixed configuration for tests: in-memory store, default title.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_path: None,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
