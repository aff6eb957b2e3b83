//! # Request Store
//!
//! Persists customer requests as a single JSON array (`data/requests.json` by default).
//! Every mutation is read-all → modify in memory → write-all; those sequences run inside
//! one async critical section so concurrent admin actions cannot overwrite each other.

use crate::domain::types::{NewRequest, Request, RequestStatus};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

pub struct RequestStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored request, oldest first.
    ///
    /// Never fails: a missing file is an empty store, and an unreadable or corrupt file
    /// is logged and treated as empty. The next save then replaces the corrupt file.
    pub fn load_all(&self) -> Vec<Request> {
        if !self.path.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Failed to read requests from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        if content.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&content) {
            Ok(requests) => requests,
            Err(e) => {
                tracing::error!(
                    "Failed to parse {}: {}. Continuing with an empty request list.",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the whole store. The file is replaced by a rename, so readers never see
    /// a partial write.
    pub fn save_all(&self, requests: &[Request]) -> Result<()> {
        let json = serde_json::to_string_pretty(requests).context("Failed to serialize requests")?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Current contents, read inside the critical section.
    pub async fn snapshot(&self) -> Vec<Request> {
        let _guard = self.lock.lock().await;
        self.load_all()
    }

    /// Appends a new request with status `new` and a unique id.
    pub async fn append_and_save(&self, new: NewRequest) -> Request {
        self.update(|requests| {
            let request = Request {
                id: next_id(requests, new.created_at.timestamp_millis()),
                user_id: new.user.id,
                user_name: new.user.name,
                created_at: new.created_at,
                status: RequestStatus::New,
                data: new.data,
            };
            requests.push(request.clone());
            (request, true)
        })
        .await
    }

    /// Runs a read-modify-write cycle. `f` returns its result and whether it changed
    /// anything; unchanged cycles skip the write.
    ///
    /// A failed save is logged and the result is still returned.
    pub async fn update<T>(&self, f: impl FnOnce(&mut Vec<Request>) -> (T, bool)) -> T {
        let _guard = self.lock.lock().await;
        let mut requests = self.load_all();
        let (result, changed) = f(&mut requests);
        if changed {
            if let Err(e) = self.save_all(&requests) {
                tracing::error!("Failed to save requests: {:#}", e);
            }
        }
        result
    }
}

/// Ids come from the creation time in milliseconds, bumped past the largest stored id
/// so two requests in the same millisecond stay distinct.
fn next_id(existing: &[Request], millis: i64) -> u64 {
    let candidate = u64::try_from(millis).unwrap_or(0);
    match existing.iter().map(|r| r.id).max() {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}
