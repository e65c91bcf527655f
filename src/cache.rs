// =============================================================================
// Analysis Cache — TTL cache keyed by (instrument, lookback)
// =============================================================================
//
// Owned by the caller and handed to whatever needs it; the analysis pipeline
// itself keeps no state between calls.  An entry is fresh while its age is
// strictly below the TTL; stale entries are never returned and are dropped
// by `prune`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::analysis::AnalysisReport;

/// Composite key identifying one cached analysis.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub instrument: String,
    pub lookback: usize,
}

impl CacheKey {
    pub fn new(instrument: impl Into<String>, lookback: usize) -> Self {
        Self {
            instrument: instrument.into(),
            lookback,
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.instrument, self.lookback)
    }
}

struct Entry {
    report: Arc<AnalysisReport>,
    stored_at: Instant,
}

/// Thread-safe TTL cache of analysis reports.
pub struct AnalysisCache {
    entries: RwLock<HashMap<CacheKey, Entry>>,
    ttl: Duration,
}

impl AnalysisCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached report for `key`, if still fresh.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<AnalysisReport>> {
        let map = self.entries.read();
        match map.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!(key = %key, "analysis cache hit");
                Some(Arc::clone(&entry.report))
            }
            Some(_) => {
                debug!(key = %key, "analysis cache entry stale");
                None
            }
            None => {
                debug!(key = %key, "analysis cache miss");
                None
            }
        }
    }

    /// Store `report` under `key`, replacing any previous entry.
    pub fn insert(&self, key: CacheKey, report: AnalysisReport) -> Arc<AnalysisReport> {
        let report = Arc::new(report);
        self.entries.write().insert(
            key,
            Entry {
                report: Arc::clone(&report),
                stored_at: Instant::now(),
            },
        );
        report
    }

    /// Fresh entry for `key`, or compute, store and return a new one.
    pub fn get_or_insert_with<F>(&self, key: CacheKey, compute: F) -> Arc<AnalysisReport>
    where
        F: FnOnce() -> AnalysisReport,
    {
        if let Some(report) = self.get(&key) {
            return report;
        }
        self.insert(key, compute())
    }

    /// Drop every stale entry.  Returns how many were evicted.
    pub fn prune(&self) -> usize {
        let mut map = self.entries.write();
        let before = map.len();
        map.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        let evicted = before - map.len();
        if evicted > 0 {
            debug!(evicted, remaining = map.len(), "analysis cache pruned");
        }
        evicted
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
