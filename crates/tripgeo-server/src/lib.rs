//! HTTP search service for the tripgeo destination pool.
//!
//! Exposes the tiered ranker over two routes:
//! - `GET /api/locations/search?q=&limit=&category=&type=` — ranked,
//!   de-duplicated destination search. `q` must be at least 2
//!   characters after trimming.
//! - `POST /api/locations` — bulk upsert of destination records,
//!   de-duplicated by `id`.
//!
//! Responses are cached in a bounded FIFO cache keyed by the
//! normalized query and its parameters.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use tracing::info;

use crate::config::Config;
use crate::state::AppState;

/// Load config, build the state and serve until the process exits.
pub async fn start_server() -> anyhow::Result<()> {
    let config = Config::load();
    let port = config.port;
    let state = AppState::new(config).await?;
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
