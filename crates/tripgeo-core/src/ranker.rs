// crates/tripgeo-core/src/ranker.rs

//! Three-tier destination search: concurrent tier fetches, priority
//! merge, de-duplication, truncation.
//!
//! # Pipeline
//!
//! 1. Normalize the query (trim + lowercase)
//! 2. Fetch the Exact, Prefix and Contains candidate sets concurrently
//!    with [`tokio::try_join!`] — each already filtered, sorted by name
//!    and capped at `limit` by the store
//! 3. Merge tier by tier, tracking seen ids: Tier 1 first, then Tier 2
//!    survivors, then Tier 3 survivors, each batch in its sorted order
//! 4. Truncate the merged list to `limit`
//!
//! A destination matching several tiers is kept at its highest tier
//! (lowest priority number) only. If any tier fetch fails, the whole
//! search fails — partial results are never returned.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::model::Destination;
use crate::store::{DestinationStore, MatchTier, SearchFilter};
use crate::text::normalize_query;

/// One ranked search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Raw query text; normalized internally. The 2-character minimum
    /// is the caller's validation concern, not the ranker's.
    pub query: String,
    /// Maximum number of results. `0` yields an empty result.
    pub limit: usize,
    pub filter: SearchFilter,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
            filter: SearchFilter::default(),
        }
    }
}

/// A destination together with the tier it was admitted at during the
/// merge. The tier is an internal artifact: public responses expose
/// plain [`Destination`] records.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDestination {
    pub destination: Destination,
    pub tier: MatchTier,
}

impl RankedDestination {
    /// Numeric priority of the admitting tier (1 = exact).
    pub fn priority(&self) -> u8 {
        self.tier.priority()
    }
}

/// Run a ranked search against `store`.
///
/// # Errors
///
/// Returns [`SearchError::Store`] if any of the three tier fetches
/// fails; no partial merge is attempted and no retry happens at this
/// layer.
pub async fn search<S>(
    store: &S,
    request: &SearchRequest,
) -> Result<Vec<RankedDestination>, SearchError>
where
    S: DestinationStore + ?Sized,
{
    let query = normalize_query(&request.query);

    let (exact, prefix, contains) = tokio::try_join!(
        store.fetch_tier(&query, MatchTier::Exact, &request.filter, request.limit),
        store.fetch_tier(&query, MatchTier::Prefix, &request.filter, request.limit),
        store.fetch_tier(&query, MatchTier::Contains, &request.filter, request.limit),
    )?;

    tracing::debug!(
        query = %query,
        exact = exact.len(),
        prefix = prefix.len(),
        contains = contains.len(),
        "tier fetches complete"
    );

    Ok(merge(exact, prefix, contains, request.limit))
}

/// Fold the three sorted candidate sets into one ranked list.
///
/// Appends each tier's entries in their already-sorted order, skipping
/// any id admitted by an earlier tier, then truncates to `limit`.
fn merge(
    exact: Vec<Destination>,
    prefix: Vec<Destination>,
    contains: Vec<Destination>,
    limit: usize,
) -> Vec<RankedDestination> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut merged: Vec<RankedDestination> = Vec::new();

    let batches = [
        (MatchTier::Exact, exact),
        (MatchTier::Prefix, prefix),
        (MatchTier::Contains, contains),
    ];

    for (tier, batch) in batches {
        for destination in batch {
            if seen.insert(destination.id) {
                merged.push(RankedDestination { destination, tier });
            }
        }
    }

    merged.truncate(limit);
    merged
}
