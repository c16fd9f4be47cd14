//! Criterion benchmarks for the tiered ranker over a synthetic pool.

use criterion::{criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;

use tripgeo_core::prelude::*;

fn synthetic_pool(size: usize) -> MemoryStore {
    let records = (0..size as i64)
        .map(|i| {
            let name = format!("City {i:05}");
            Destination {
                id: i,
                name: name.clone(),
                name_normalized: name.to_lowercase(),
                display_name: format!("{name}, Benchland"),
                category: "place".into(),
                kind: "city".into(),
                country: Some("Benchland".into()),
                region: None,
                city: None,
                lat: 0.0,
                lon: 0.0,
                importance: 0.5,
                place_rank: 16,
                boundingbox: None,
            }
        })
        .collect();
    MemoryStore::with_records(records)
}

fn bench_search(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let store = synthetic_pool(10_000);

    c.bench_function("search_prefix_10k", |b| {
        let request = SearchRequest::new("city 001", 10);
        b.iter(|| {
            rt.block_on(async {
                search(&store, &request).await.expect("search");
            })
        })
    });

    c.bench_function("search_contains_10k", |b| {
        let request = SearchRequest::new("42", 10);
        b.iter(|| {
            rt.block_on(async {
                search(&store, &request).await.expect("search");
            })
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
