//! Basic usage example for tripgeo-rs
//!
//! This example demonstrates how to:
//! - Build an in-memory destination pool
//! - Run tiered searches (exact / prefix / contains)
//! - Apply category and type filters
//! - See de-duplication and truncation in action

use tripgeo_core::prelude::*;

fn dest(id: i64, name: &str, display_name: &str, kind: &str) -> Destination {
    Destination {
        id,
        name: name.into(),
        name_normalized: fold_key(name),
        display_name: display_name.into(),
        category: "place".into(),
        kind: kind.into(),
        country: None,
        region: None,
        city: None,
        lat: 0.0,
        lon: 0.0,
        importance: 0.5,
        place_rank: 16,
        boundingbox: None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== tripgeo-rs Basic Usage Example ===\n");

    // Build a small pool
    let store = MemoryStore::new();
    store
        .upsert(vec![
            dest(1, "Paris", "Paris, Île-de-France, France", "city"),
            dest(2, "Particle City", "Particle City, Atomland", "city"),
            dest(3, "Saint-Par", "Saint-Par, Normandy, France", "village"),
            dest(4, "Parma", "Parma, Emilia-Romagna, Italy", "city"),
            dest(5, "Zürich", "Zürich, Switzerland", "city"),
        ])
        .await?;
    println!("✓ Pool loaded with 5 destinations\n");

    // Example 1: prefix + contains tiers
    println!("--- Example 1: Search \"par\" ---");
    let hits = search(&store, &SearchRequest::new("par", 10)).await?;
    for hit in &hits {
        println!(
            "[tier {}] {} — {}",
            hit.priority(),
            hit.destination.name,
            hit.destination.display_name
        );
    }
    println!();

    // Example 2: accent-folded matching
    println!("--- Example 2: Search \"zurich\" ---");
    let hits = search(&store, &SearchRequest::new("zurich", 10)).await?;
    for hit in &hits {
        println!("[tier {}] {}", hit.priority(), hit.destination.name);
    }
    println!();

    // Example 3: truncation keeps the highest tiers
    println!("--- Example 3: Search \"par\" with limit 2 ---");
    let hits = search(&store, &SearchRequest::new("par", 2)).await?;
    for hit in &hits {
        println!("[tier {}] {}", hit.priority(), hit.destination.name);
    }
    println!();

    // Example 4: type filter
    println!("--- Example 4: Search \"par\" restricted to villages ---");
    let request = SearchRequest {
        query: "par".into(),
        limit: 10,
        filter: SearchFilter {
            category: None,
            kind: Some("village".into()),
        },
    };
    let hits = search(&store, &request).await?;
    for hit in &hits {
        println!("[tier {}] {}", hit.priority(), hit.destination.name);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
