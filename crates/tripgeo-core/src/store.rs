// crates/tripgeo-core/src/store.rs

//! The data-access seam between the ranker and the destination pool.
//!
//! The ranker issues three independent tier fetches per search; a
//! [`DestinationStore`] answers each one with an already-sorted,
//! already-capped candidate set. Retries and timeouts, if any, belong
//! to the store implementation, never to the ranker.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::Destination;

mod memory;

pub use memory::MemoryStore;

/// The three match tiers, from strongest to weakest.
///
/// A tier matches when either `name` or `name_normalized` satisfies
/// its predicate against the normalized query, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// Field equals the query.
    Exact,
    /// Field starts with the query.
    Prefix,
    /// Field contains the query anywhere.
    Contains,
}

impl MatchTier {
    /// Numeric priority of this tier; lower wins during the merge.
    pub fn priority(self) -> u8 {
        match self {
            Self::Exact => 1,
            Self::Prefix => 2,
            Self::Contains => 3,
        }
    }

    /// All tiers in merge order.
    pub fn all() -> [MatchTier; 3] {
        [Self::Exact, Self::Prefix, Self::Contains]
    }

    /// Whether `haystack` (already lowercased) satisfies this tier's
    /// predicate for `query` (already normalized).
    fn matches_field(self, haystack: &str, query: &str) -> bool {
        match self {
            Self::Exact => haystack == query,
            Self::Prefix => haystack.starts_with(query),
            Self::Contains => haystack.contains(query),
        }
    }

    /// Whether the destination matches this tier on `name` OR
    /// `name_normalized`. `display_name` is never a match target.
    pub fn matches(self, destination: &Destination, query: &str) -> bool {
        self.matches_field(&destination.name_key(), query)
            || self.matches_field(&destination.normalized_key(), query)
    }
}

/// Optional classification filters applied to every tier fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub category: Option<String>,
    /// Matches the destination's `type` tag.
    pub kind: Option<String>,
}

impl SearchFilter {
    pub fn accepts(&self, destination: &Destination) -> bool {
        if let Some(category) = &self.category {
            if &destination.category != category {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if &destination.kind != kind {
                return false;
            }
        }
        true
    }
}

/// Read/write access to the destination pool.
///
/// `fetch_tier` must return candidates sorted alphabetically by
/// lowercased `name` ascending (ties broken by `id` ascending) and
/// capped at `limit` records. The ranker relies on that ordering: the
/// merge appends each tier's survivors in the order the store returned
/// them.
#[async_trait]
pub trait DestinationStore: Send + Sync {
    /// Fetch up to `limit` destinations matching `tier` for the
    /// normalized `query`, restricted by `filter`.
    async fn fetch_tier(
        &self,
        query: &str,
        tier: MatchTier,
        filter: &SearchFilter,
        limit: usize,
    ) -> Result<Vec<Destination>, StoreError>;

    /// Bulk ingestion: insert or replace records, de-duplicated by
    /// `id` (last write wins). Returns the number of records applied.
    async fn upsert(&self, records: Vec<Destination>) -> Result<usize, StoreError>;

    /// Number of destinations currently in the pool.
    async fn count(&self) -> Result<usize, StoreError>;
}
