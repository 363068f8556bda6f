// src/submission/store.rs

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use std::{
    cmp::Reverse,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::debug;

use super::Submission;
use crate::convert::write_json_pretty;

/// Where explanations are kept.
pub trait SubmissionStore {
    /// Store a new explanation and return it with its assigned id.
    fn insert(&self, explanation: String, timestamp: DateTime<Utc>) -> Result<Submission>;

    /// Up to `limit` submissions, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<Submission>>;
}

/// Submissions kept in memory and mirrored to a single JSON array file.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<Vec<Submission>>,
}

impl JsonFileStore {
    /// Load `path` if it exists, otherwise start empty. The file is only
    /// created on the first insert.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries: Vec<Submission> = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = entries.len(), "opened submission store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionStore for JsonFileStore {
    fn insert(&self, explanation: String, timestamp: DateTime<Utc>) -> Result<Submission> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("submission store lock poisoned"))?;

        let id = entries.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let submission = Submission {
            id,
            explanation,
            timestamp,
        };
        entries.push(submission.clone());

        // persist under the lock so concurrent inserts cannot interleave
        if let Err(e) = write_json_pretty(&self.path, entries.as_slice()) {
            entries.pop();
            return Err(e.context(format!("saving {}", self.path.display())));
        }
        Ok(submission)
    }

    fn recent(&self, limit: usize) -> Result<Vec<Submission>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("submission store lock poisoned"))?;

        let mut out = entries.clone();
        out.sort_by_key(|s| Reverse((s.timestamp, s.id)));
        out.truncate(limit);
        Ok(out)
    }
}
