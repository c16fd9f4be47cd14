// crates/tripgeo-core/src/lib.rs

//! Tiered destination search for trip planning.
//!
//! Given a free-text query, the ranker produces a ranked, de-duplicated
//! list of [`Destination`] records from a candidate pool using a
//! three-tier priority scheme — exact match, prefix match, substring
//! match — evaluated against `name` and `name_normalized`.
//!
//! The candidate pool is behind the [`DestinationStore`] trait; an
//! in-memory implementation ([`MemoryStore`]) ships with the crate.
//! The three tier fetches are issued concurrently and merged by
//! priority, highest tier winning on duplicate ids.

pub mod cache;
pub mod error;
pub mod model;
pub mod ranker;
pub mod store;
pub mod text;

// Re-exports
pub use crate::cache::{BoundedCache, EvictionPolicy, FifoPolicy};
pub use crate::error::{Result, SearchError, StoreError};
pub use crate::model::Destination;
pub use crate::ranker::{search, RankedDestination, SearchRequest};
pub use crate::store::{DestinationStore, MatchTier, MemoryStore, SearchFilter};

/// Common imports for consumers of the crate.
pub mod prelude {
    pub use crate::cache::BoundedCache;
    pub use crate::error::{Result, SearchError, StoreError};
    pub use crate::model::Destination;
    pub use crate::ranker::{search, RankedDestination, SearchRequest};
    pub use crate::store::{DestinationStore, MatchTier, MemoryStore, SearchFilter};
    pub use crate::text::{fold_key, normalize_query};
}
