//! tripgeo — Command-line interface for tripgeo-core
//!
//! This binary loads a destination dataset from a JSON file and runs
//! ranked searches against it from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show pool stats
//!   $ tripgeo --input destinations.json stats
//!
//! - Search destinations (three-tier ranking: exact, prefix, contains)
//!   $ tripgeo --input destinations.json search paris
//!   $ tripgeo --input destinations.json search par --limit 5 --type city
//!
//! Records missing `name_normalized` get one derived by ASCII-folding
//! the display name, so "Zürich" is findable as "zurich".
mod args;

use anyhow::{bail, Context};
use clap::Parser;

use crate::args::{CliArgs, Commands};
use tripgeo_core::prelude::*;

const MIN_QUERY_LEN: usize = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let input_path = args
        .input
        .context("no input dataset: pass --input <path-to-json>")?;
    let records = load_dataset(&input_path)?;

    let store = MemoryStore::new();
    let loaded = store
        .upsert(records)
        .await
        .context("failed to load destination pool")?;

    match args.command {
        Commands::Stats => {
            println!("Destination pool:");
            println!("  Records: {loaded}");
        }

        Commands::Search {
            query,
            limit,
            category,
            kind,
        } => {
            if query.trim().chars().count() < MIN_QUERY_LEN {
                bail!("query must be at least {MIN_QUERY_LEN} characters");
            }

            let request = SearchRequest {
                query,
                limit,
                filter: SearchFilter { category, kind },
            };
            let hits = search(&store, &request).await?;

            if hits.is_empty() {
                println!("No destinations found matching: {}", request.query);
            } else {
                for hit in hits {
                    println!(
                        "[tier {}] {} — {}",
                        hit.priority(),
                        hit.destination.name,
                        hit.destination.display_name
                    );
                }
            }
        }
    }

    Ok(())
}

/// Read a JSON array of destination records, deriving
/// `name_normalized` where the dataset omits it.
fn load_dataset(path: &str) -> anyhow::Result<Vec<Destination>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("dataset not found at {path}"))?;
    let mut records: Vec<Destination> =
        serde_json::from_str(&raw).with_context(|| format!("invalid dataset JSON in {path}"))?;

    for record in &mut records {
        if record.name_normalized.is_empty() {
            record.name_normalized = fold_key(&record.name);
        }
    }
    Ok(records)
}
