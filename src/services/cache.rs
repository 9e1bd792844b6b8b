use std::sync::Arc;
use std::time::Duration;
use crate::models::University;

/// Default snapshot lifetime when none is configured
pub const DEFAULT_TTL_SECS: u64 = 300;

/// In-process cache of catalog snapshots
///
/// Snapshots are shared behind an `Arc`, so a hit never copies the catalog.
#[derive(Clone)]
pub struct SnapshotCache {
    snapshots: moka::future::Cache<String, Arc<Vec<University>>>,
    ttl_secs: u64,
}

impl SnapshotCache {
    pub fn new(ttl_secs: u64) -> Self {
        let snapshots = moka::future::CacheBuilder::new(16)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { snapshots, ttl_secs }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<University>>> {
        let hit = self.snapshots.get(key).await;
        if hit.is_some() {
            tracing::trace!("Snapshot cache hit: {}", key);
        } else {
            tracing::trace!("Snapshot cache miss: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: &str, snapshot: Arc<Vec<University>>) {
        self.snapshots.insert(key.to_string(), snapshot).await;
        tracing::trace!("Snapshot cache set: {}", key);
    }

    pub async fn invalidate(&self, key: &str) {
        self.snapshots.invalidate(key).await;
        tracing::debug!("Invalidated catalog snapshot: {}", key);
    }
}

impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("entries", &self.snapshots.entry_count())
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a catalog collection snapshot
    pub fn catalog(collection: &str) -> String {
        format!("catalog:{}", collection)
    }
}
