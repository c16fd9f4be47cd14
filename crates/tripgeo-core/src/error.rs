// crates/tripgeo-core/src/error.rs

use thiserror::Error;

/// Errors raised by a [`DestinationStore`](crate::store::DestinationStore)
/// implementation while reading or writing the destination pool.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying data source could not be reached or answered with
    /// a failure.
    #[error("destination pool unavailable: {0}")]
    Unavailable(String),

    /// A destination record could not be interpreted.
    #[error("malformed destination record: {0}")]
    Malformed(String),
}

/// Errors raised by the search ranker.
///
/// The merge step itself cannot fail; the only failure mode is one of
/// the three tier fetches erroring, in which case the whole search is
/// failed and no partial results are returned.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("candidate fetch failed: {0}")]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;
