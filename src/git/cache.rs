//! Per-file blame cache.
//!
//! Blame for a file is computed at most once per attributor; every later
//! line of the same file is answered from memory. An empty entry means
//! "no history" (outside the repository, ignored, or the backend failed)
//! and is never retried.
//!
//! There is no invalidation: the repository is assumed not to change during
//! one page-generation pass. The cache is not synchronized. It is owned by a
//! single `LineAttributor` whose `resolve` takes `&mut self`; a host that
//! resolves lines from several threads has to put the attributor behind a
//! `Mutex` or the same file may be blamed twice.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::BlameHunk;

#[derive(Debug, Default)]
pub struct HistoryCache {
    /// absolute file path -> hunks of its final revision
    entries: HashMap<PathBuf, Vec<BlameHunk>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached hunks for `path`, running `compute` on the first request only.
    pub fn get_or_compute<F>(&mut self, path: &Path, compute: F) -> &[BlameHunk]
    where
        F: FnOnce() -> Vec<BlameHunk>,
    {
        self.entries.entry(path.to_path_buf()).or_insert_with(|| {
            let start = std::time::Instant::now();
            let hunks = compute();
            tracing::debug!(
                "Blame cached for {}: {} hunks in {:?}",
                path.display(),
                hunks.len(),
                start.elapsed()
            );
            hunks
        })
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache statistics for debugging
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached_paths: self.entries.len(),
            empty_paths: self.entries.values().filter(|h| h.is_empty()).count(),
            total_hunks: self.entries.values().map(Vec::len).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub cached_paths: usize,
    /// Paths remembered as having no history
    pub empty_paths: usize,
    pub total_hunks: usize,
}
