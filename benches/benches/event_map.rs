// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use venue_benches::{BenchEvent, synthetic_events};
use venue_map::EventMap;

fn bench_set_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("map/set_events");
    let view = Size::new(1280.0, 800.0);

    // Hypothesis: an unchanged collection costs one slice comparison, far
    // below a rebuild of clusters, bounds and markers.
    for len in [256usize, 4_096] {
        let events = synthetic_events(len, 64, 8);

        group.bench_with_input(BenchmarkId::new("rebuild", len), &events, |b, events| {
            b.iter_batched(
                || (EventMap::<BenchEvent>::new(view), events.clone()),
                |(mut map, events)| {
                    map.set_events(events);
                    black_box(map);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("unchanged", len), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut map = EventMap::<BenchEvent>::new(view);
                    map.set_events(events.clone());
                    (map, events.clone())
                },
                |(mut map, events)| {
                    black_box(map.set_events(events));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_events);
criterion_main!(benches);
