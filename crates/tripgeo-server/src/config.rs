use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Server configuration, loaded from the environment with logged
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Capacity of the bounded search-response cache.
    pub cache_capacity: usize,
    /// Optional path to a JSON array of destination records loaded
    /// into the pool at startup.
    pub seed_path: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("TRIPGEO_PORT", "3000"),
            cache_capacity: try_load("TRIPGEO_CACHE_CAPACITY", "100"),
            seed_path: env::var("TRIPGEO_SEED").ok(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
