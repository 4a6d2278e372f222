//! In-memory standings snapshot cache.
//!
//! Reads of the standings table do not take the season lock; they may be
//! served from the last snapshot written here. Edits replace the entry for
//! their year so the next read observes the post-edit table.

use crate::model::StandingRow;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// How many seasons' standings stay resident.
const DEFAULT_CAPACITY: usize = 16;

/// LRU cache of per-year standings snapshots.
pub struct StandingsCache {
    inner: Mutex<LruCache<String, Vec<StandingRow>>>,
}

impl StandingsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    /// Last-written snapshot for a year, if resident.
    pub fn get(&self, year: &str) -> Option<Vec<StandingRow>> {
        self.inner.lock().unwrap().get(year).cloned()
    }

    /// Replace the snapshot for a year.
    pub fn put(&self, year: &str, standings: Vec<StandingRow>) {
        self.inner.lock().unwrap().put(year.to_string(), standings);
    }
}

impl Default for StandingsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
