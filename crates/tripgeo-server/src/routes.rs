use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tripgeo_core::{search, Destination, DestinationStore, SearchFilter, SearchRequest};

use crate::error::AppError;
use crate::state::AppState;

/// Queries shorter than this (after trimming) are rejected before the
/// ranker runs.
pub const MIN_QUERY_LEN: usize = 2;

/// Default number of results when `limit` is omitted.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Cache key for one search response: the normalized query plus every
/// parameter that changes the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    query: String,
    limit: usize,
    category: Option<String>,
    kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Destination>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertResponse {
    pub upserted: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/locations/search", get(search_handler))
        .route("/api/locations", post(upsert_handler))
        .with_state(state)
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params.q.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::QueryTooShort);
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let key = SearchKey {
        query: query.to_lowercase(),
        limit,
        category: params.category.clone(),
        kind: params.kind.clone(),
    };

    if let Some(cached) = state.cache.lock().await.get(&key) {
        tracing::debug!(query = %key.query, "search cache hit");
        return Ok(Json(cached.clone()));
    }

    let request = SearchRequest {
        query: query.to_string(),
        limit,
        filter: SearchFilter {
            category: params.category,
            kind: params.kind,
        },
    };

    let hits = search(&state.store, &request).await?;
    let results: Vec<Destination> = hits.into_iter().map(|h| h.destination).collect();
    let response = SearchResponse {
        count: results.len(),
        results,
    };

    state.cache.lock().await.insert(key, response.clone());
    Ok(Json(response))
}

pub async fn upsert_handler(
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<Destination>>,
) -> Result<Json<UpsertResponse>, AppError> {
    let upserted = state.store.upsert(records).await?;
    // Cached responses may no longer reflect the pool; drop them all.
    state.cache.lock().await.clear();
    tracing::info!(upserted, "destinations ingested");
    Ok(Json(UpsertResponse { upserted }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config() -> Config {
        Config {
            port: 0,
            cache_capacity: 4,
            seed_path: None,
        }
    }

    fn dest(id: i64, name: &str) -> Destination {
        Destination {
            id,
            name: name.into(),
            name_normalized: name.to_lowercase(),
            display_name: format!("{name}, Testland"),
            category: "place".into(),
            kind: "city".into(),
            country: Some("Testland".into()),
            region: None,
            city: None,
            lat: 0.0,
            lon: 0.0,
            importance: 0.5,
            place_rank: 16,
            boundingbox: None,
        }
    }

    fn params(q: &str, limit: Option<usize>) -> SearchParams {
        SearchParams {
            q: q.into(),
            limit,
            category: None,
            kind: None,
        }
    }

    #[tokio::test]
    async fn short_query_is_rejected_before_ranking() {
        let state = AppState::new(test_config()).await.expect("state");
        let result = search_handler(State(state), Query(params("p", None))).await;
        assert!(matches!(result, Err(AppError::QueryTooShort)));
    }

    #[tokio::test]
    async fn whitespace_padding_does_not_satisfy_the_minimum() {
        let state = AppState::new(test_config()).await.expect("state");
        let result = search_handler(State(state), Query(params("  p  ", None))).await;
        assert!(matches!(result, Err(AppError::QueryTooShort)));
    }

    #[tokio::test]
    async fn search_returns_ranked_results_and_count() {
        let state = AppState::new(test_config()).await.expect("state");
        state
            .store
            .upsert(vec![dest(1, "Paris"), dest(2, "Particle City")])
            .await
            .expect("upsert");

        let Json(response) = search_handler(State(state), Query(params("par", None)))
            .await
            .expect("search");
        assert_eq!(response.count, 2);
        assert_eq!(response.results[0].name, "Paris");
        assert_eq!(response.results[1].name, "Particle City");
    }

    #[tokio::test]
    async fn limit_truncates_the_response() {
        let state = AppState::new(test_config()).await.expect("state");
        state
            .store
            .upsert(vec![dest(7, "London"), dest(8, "Avalon")])
            .await
            .expect("upsert");

        let Json(response) = search_handler(State(state), Query(params("lon", Some(1))))
            .await
            .expect("search");
        assert_eq!(response.count, 1);
        assert_eq!(response.results[0].name, "London");
    }

    #[tokio::test]
    async fn repeated_search_is_served_from_cache() {
        let state = AppState::new(test_config()).await.expect("state");
        state
            .store
            .upsert(vec![dest(1, "Paris")])
            .await
            .expect("upsert");

        let Json(first) = search_handler(State(state.clone()), Query(params("paris", None)))
            .await
            .expect("search");
        assert_eq!(first.count, 1);
        assert_eq!(state.cache.lock().await.len(), 1);

        let Json(second) = search_handler(State(state), Query(params("PARIS", None)))
            .await
            .expect("search");
        assert_eq!(second.count, 1);
        assert_eq!(second.results[0].id, first.results[0].id);
    }

    #[tokio::test]
    async fn ingestion_invalidates_cached_searches() {
        let state = AppState::new(test_config()).await.expect("state");
        state
            .store
            .upsert(vec![dest(1, "Paris")])
            .await
            .expect("upsert");

        let Json(before) = search_handler(State(state.clone()), Query(params("par", None)))
            .await
            .expect("search");
        assert_eq!(before.count, 1);

        let Json(ingested) = upsert_handler(State(state.clone()), Json(vec![dest(2, "Parma")]))
            .await
            .expect("upsert");
        assert_eq!(ingested.upserted, 1);

        // The same query must now see the new record, not the cached
        // response.
        let Json(after) = search_handler(State(state), Query(params("par", None)))
            .await
            .expect("search");
        assert_eq!(after.count, 2);
        let names: Vec<_> = after.results.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Paris", "Parma"]);
    }

    #[tokio::test]
    async fn upsert_deduplicates_by_id() {
        let state = AppState::new(test_config()).await.expect("state");

        let Json(response) = upsert_handler(
            State(state.clone()),
            Json(vec![dest(1, "Paris"), dest(1, "Paris (fixed)")]),
        )
        .await
        .expect("upsert");
        assert_eq!(response.upserted, 2);
        assert_eq!(state.store.count().await.expect("count"), 1);
    }
}
