use std::{fs, sync::Arc};

use tokio::sync::Mutex;
use tracing::info;

use tripgeo_core::{BoundedCache, Destination, DestinationStore, MemoryStore};

use super::config::Config;
use super::routes::{SearchKey, SearchResponse};

pub struct AppState {
    pub store: MemoryStore,
    pub cache: Mutex<BoundedCache<SearchKey, SearchResponse>>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let store = MemoryStore::new();

        if let Some(path) = &config.seed_path {
            let raw = fs::read_to_string(path)?;
            let records: Vec<Destination> = serde_json::from_str(&raw)?;
            let seeded = store.upsert(records).await?;
            info!("seeded {seeded} destinations from {path}");
        }

        let cache = Mutex::new(BoundedCache::new(config.cache_capacity));

        Ok(Arc::new(Self {
            store,
            cache,
            config,
        }))
    }
}
