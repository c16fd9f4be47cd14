// crates/tripgeo-core/src/store/memory.rs

//! In-memory destination pool.
//!
//! Backed by a `tokio::sync::RwLock<HashMap<id, Destination>>`; tier
//! fetches take a read lock, upserts a write lock. Good for tests, the
//! CLI, and single-node deployments of the search service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::Destination;

use super::{DestinationStore, MatchTier, SearchFilter};

/// In-memory [`DestinationStore`]. Cheap to clone; clones share the
/// same pool.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pool: Arc<RwLock<HashMap<i64, Destination>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that seeds the pool synchronously.
    pub fn with_records(records: Vec<Destination>) -> Self {
        let pool = records.into_iter().map(|d| (d.id, d)).collect();
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }
}

#[async_trait]
impl DestinationStore for MemoryStore {
    async fn fetch_tier(
        &self,
        query: &str,
        tier: MatchTier,
        filter: &SearchFilter,
        limit: usize,
    ) -> Result<Vec<Destination>, StoreError> {
        let pool = self.pool.read().await;

        let mut out: Vec<Destination> = pool
            .values()
            .filter(|d| filter.accepts(d) && tier.matches(d, query))
            .cloned()
            .collect();

        // Alphabetical by lowercased name, id ascending on ties.
        out.sort_by(|a, b| a.name_key().cmp(&b.name_key()).then(a.id.cmp(&b.id)));
        out.truncate(limit);
        Ok(out)
    }

    async fn upsert(&self, records: Vec<Destination>) -> Result<usize, StoreError> {
        let mut pool = self.pool.write().await;
        let applied = records.len();
        for record in records {
            pool.insert(record.id, record);
        }
        Ok(applied)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.pool.read().await.len())
    }
}
