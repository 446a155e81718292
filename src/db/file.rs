// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only JSON-lines run store.
//!
//! Each run is one line of JSON in the same shape the API accepts, so the
//! file can be inspected or replayed by hand. A missing file is an empty
//! store.
//!
//! Calls are blocking `std::fs` I/O; the HTTP layer runs them on tokio's
//! blocking pool.

use crate::db::{RunStore, StoreError};
use crate::models::RunRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Run store persisted to a local file.
#[derive(Debug)]
pub struct FileRunStore {
    path: PathBuf,
    // Serializes appends and reads against each other
    lock: Mutex<()>,
}

impl FileRunStore {
    /// Open (without creating) a store at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, action: &str, e: impl std::fmt::Display) -> StoreError {
        StoreError::StorageUnavailable(format!("{} {}: {}", action, self.path.display(), e))
    }

    /// Repair an unterminated last line before appending after it.
    ///
    /// A tail that parses is a complete record missing its newline and gets
    /// one; anything else is an interrupted append and is cut off.
    fn repair_tail(&self, file: &mut File) -> Result<(), StoreError> {
        let len = file.metadata().map_err(|e| self.unavailable("stat", e))?.len();
        if len == 0 {
            return Ok(());
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| self.unavailable("read", e))?;
        if last[0] == b'\n' {
            return Ok(());
        }

        let mut contents = Vec::new();
        file.seek(SeekFrom::Start(0))
            .and_then(|_| file.read_to_end(&mut contents))
            .map_err(|e| self.unavailable("read", e))?;
        let keep = contents
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);

        if serde_json::from_slice::<RunRecord>(&contents[keep..]).is_ok() {
            return file
                .write_all(b"\n")
                .map_err(|e| self.unavailable("write", e));
        }

        tracing::warn!(
            path = %self.path.display(),
            dropped_bytes = contents.len() - keep,
            "Discarding torn record at end of run file"
        );
        file.set_len(keep as u64)
            .map_err(|e| self.unavailable("truncate", e))
    }
}

impl RunStore for FileRunStore {
    fn record(&self, run: RunRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&run)
            .map_err(|e| StoreError::StorageUnavailable(format!("encode run: {}", e)))?;
        line.push('\n');

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable("open", e))?;

        self.repair_tail(&mut file)?;

        // Single write of the whole line keeps records from interleaving
        file.write_all(line.as_bytes())
            .map_err(|e| self.unavailable("write", e))?;

        tracing::debug!(path = %self.path.display(), "Run appended to file store");
        Ok(())
    }

    fn all_runs(&self) -> Result<Vec<RunRecord>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable("read", e)),
        };

        let mut lines: Vec<&[u8]> = contents.split(|&b| b == b'\n').collect();
        // Text after the last newline is a torn append unless it parses
        let tail = lines.pop().unwrap_or_default();

        let mut runs: Vec<RunRecord> = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            if line.trim_ascii().is_empty() {
                continue;
            }
            let run = serde_json::from_slice(line).map_err(|e| {
                StoreError::StorageUnavailable(format!(
                    "{}:{}: corrupt record: {}",
                    self.path.display(),
                    idx + 1,
                    e
                ))
            })?;
            runs.push(run);
        }

        if !tail.trim_ascii().is_empty() {
            match serde_json::from_slice(tail) {
                Ok(run) => runs.push(run),
                Err(e) => tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring torn record at end of run file"
                ),
            }
        }

        Ok(runs)
    }
}
