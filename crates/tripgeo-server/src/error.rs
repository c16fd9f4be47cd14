use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tripgeo_core::{SearchError, StoreError};

use crate::routes::MIN_QUERY_LEN;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("query must be at least {MIN_QUERY_LEN} characters")]
    QueryTooShort,

    #[error("search failed")]
    Search(#[from] SearchError),

    #[error("ingest failed")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::QueryTooShort => StatusCode::BAD_REQUEST,
            AppError::Search(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Data-source failures stay opaque to the caller; details go
        // to the log only.
        if let AppError::Search(err) = &self {
            tracing::error!(error = %err, "search failed");
        }
        if let AppError::Store(err) = &self {
            tracing::error!(error = %err, "ingest failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
