// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Venue benchmarks.

use venue_cluster::{Event, Location};

/// Event type used across the benchmarks.
pub type BenchEvent = Event<u32, u32>;

/// Builds `len` events spread over `locations` places, with every
/// `unlocated_every`-th event missing a location.
///
/// Coordinates come from a fixed LCG so runs are comparable.
pub fn synthetic_events(len: usize, locations: u32, unlocated_every: usize) -> Vec<BenchEvent> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    let places: Vec<Location<u32>> = (0..locations.max(1))
        .map(|id| {
            let lat = (next() % 170_000) as f64 / 1_000.0 - 85.0;
            let lng = (next() % 360_000) as f64 / 1_000.0 - 180.0;
            Location::new(id, lat, lng)
        })
        .collect();

    (0..len)
        .map(|i| {
            let id = u32::try_from(i).unwrap_or(u32::MAX);
            if unlocated_every != 0 && i % unlocated_every == 0 {
                Event::new(id, None)
            } else {
                let place = &places[(next() % places.len() as u64) as usize];
                Event::new(id, Some(place.clone()))
            }
        })
        .collect()
}
