// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use venue_benches::synthetic_events;
use venue_cluster::aggregate;
use venue_viewport::compute_bounds;

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster/aggregate");

    // Few places with many events each, versus nearly one place per event.
    for (len, locations) in [(1_024usize, 16u32), (1_024, 1_024), (16_384, 64), (16_384, 16_384)] {
        let events = synthetic_events(len, locations, 10);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("{locations}_locations"), len),
            &events,
            |b, events| b.iter(|| black_box(aggregate(events))),
        );
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/compute_bounds");

    for locations in [16u32, 1_024, 16_384] {
        let events = synthetic_events(locations as usize * 2, locations, 0);
        let clusters = aggregate(&events);
        group.throughput(Throughput::Elements(clusters.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(locations),
            &clusters,
            |b, clusters| b.iter(|| black_box(compute_bounds(clusters))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_bounds);
criterion_main!(benches);
