//! Time-bounded cache of repository status snapshots.
//!
//! Holds at most one [`CacheEntry`] per repository root. A fetch replaces the
//! entry for its root wholesale. Entries expire lazily: age is only checked
//! when the root is read again. There is no per-root invalidation, only
//! [`StatusCache::invalidate_all`].

use crate::core::fetcher::{StatusFetcher, StatusMap};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub status: StatusMap,
    pub fetched_at: Instant,
}

#[derive(Debug, Clone)]
pub struct StatusCache {
    ttl: Duration,
    entries: HashMap<PathBuf, CacheEntry>,
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl StatusCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Change the TTL; existing entries are judged against the new value
    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    /// Status for `root`, fetching through `fetcher` unless a fresh entry exists.
    ///
    /// An entry is fresh while `now - fetched_at < ttl`.
    pub fn get_status(
        &mut self,
        root: &Path,
        now: Instant,
        fetcher: &dyn StatusFetcher,
    ) -> &StatusMap {
        let fresh = self
            .entries
            .get(root)
            .is_some_and(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl);

        if fresh {
            log::debug!("Status cache hit for {}", root.display());
        } else {
            log::debug!("Status cache miss for {}", root.display());
            let status = fetcher.fetch_status(root);
            self.entries.insert(
                root.to_path_buf(),
                CacheEntry {
                    status,
                    fetched_at: now,
                },
            );
        }

        &self.entries[root].status
    }

    /// Drop every entry so the next read of any root fetches again
    pub fn invalidate_all(&mut self) {
        log::debug!("Invalidating {} cached status entries", self.entries.len());
        self.entries.clear();
    }

    pub fn entry(&self, root: &Path) -> Option<&CacheEntry> {
        self.entries.get(root)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
