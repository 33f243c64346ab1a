//! Benchmarks for request construction.
//!
//! Covers period resolution and NDJSON payload rendering, which run once per search.

use criterion::{Criterion, criterion_group, criterion_main};
use kishell_client::{SearchPayload, build_clause, resolve_period};
use std::hint::black_box;

const NOW: i64 = 1_700_000_000_000;

fn bench_resolve_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_period");
    for input in ["now", "15m", "1h30m", "-2.5d", "1y2M3w"] {
        group.bench_function(input, |b| {
            b.iter(|| resolve_period(black_box(input), NOW).unwrap())
        });
    }
    group.finish();
}

fn bench_to_ndjson(c: &mut Criterion) {
    let payload = SearchPayload {
        index: "logs-*".to_string(),
        size: 500,
        window_filter: "@timestamp".to_string(),
        time_zone: "+02:00".to_string(),
        clause: build_clause(Some("level:error AND message:\"connection reset\"")),
        newer: NOW - 900_000,
        older: NOW,
    };

    c.bench_function("to_ndjson", |b| {
        b.iter(|| black_box(&payload).to_ndjson().unwrap())
    });
}

criterion_group!(benches, bench_resolve_period, bench_to_ndjson);
criterion_main!(benches);
