use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::Value;
use std::hint::black_box;
use tzpop_core::{Catalog, MemoryStore, PopularityStore, QueryEngine, Result, TimeLookup};

struct NoTime;

impl TimeLookup for NoTime {
    fn lookup(&self, _timezone: &str) -> Result<Value> {
        Ok(Value::Null)
    }
}

/// ~600 entries spread over the usual IANA regions.
fn synthetic_engine() -> QueryEngine<MemoryStore, NoTime> {
    let regions = [
        "Africa", "America", "Antarctica", "Asia", "Atlantic", "Australia", "Europe", "Indian",
        "Pacific", "Etc",
    ];
    let ids: Vec<String> = regions
        .iter()
        .flat_map(|r| (0..60).map(move |i| format!("{r}/City_{i:02}")))
        .collect();
    let store = MemoryStore::new();
    for (n, id) in ids.iter().enumerate() {
        for _ in 0..(n % 5) {
            store.increment(id).unwrap();
        }
    }
    QueryEngine::new(Catalog::from_ids(ids), store, NoTime)
}

fn bench_popularity(c: &mut Criterion) {
    let engine = synthetic_engine();

    c.bench_function("popularity_of exact", |b| {
        b.iter(|| engine.popularity_of(black_box("Europe/City_30")).unwrap())
    });
    c.bench_function("popularity_of region", |b| {
        b.iter(|| engine.popularity_of(black_box("America")).unwrap())
    });
    c.bench_function("popularity_of no match", |b| {
        b.iter(|| engine.popularity_of(black_box("Mars")).unwrap())
    });
}

criterion_group!(benches, bench_popularity);
criterion_main!(benches);
