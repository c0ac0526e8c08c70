// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for location aggregation.
//!
//! These exercise the partition and ordering guarantees of `aggregate`, and
//! that caller-defined records can be grouped through `Located`.

use venue_cluster::{Event, LatLng, Located, Location, aggregate};

fn at(id: u32, location: Option<(u32, f64, f64)>) -> Event<u32, u32> {
    Event::new(id, location.map(|(key, lat, lng)| Location::new(key, lat, lng)))
}

fn mixed_events() -> Vec<Event<u32, u32>> {
    vec![
        at(1, Some((100, 10.0, 20.0))),
        at(2, None),
        at(3, Some((200, 30.0, 40.0))),
        at(4, Some((100, 10.0, 20.0))),
        at(5, Some((300, -5.0, 120.0))),
        at(6, None),
        at(7, Some((200, 30.0, 40.0))),
        at(8, Some((100, 10.0, 20.0))),
    ]
}

#[test]
fn two_events_share_a_location_one_stands_alone() {
    let events = vec![
        at(1, Some((1, 10.0, 20.0))),
        at(2, Some((1, 10.0, 20.0))),
        at(3, Some((2, 30.0, 40.0))),
    ];
    let clusters = aggregate(&events);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters.get(&1).map(|c| c.len()), Some(2));
    assert_eq!(clusters.get(&2).map(|c| c.len()), Some(1));
}

#[test]
fn empty_input_yields_no_clusters() {
    let clusters = aggregate::<Event<u32, u32>>(&[]);
    assert!(clusters.is_empty());
}

#[test]
fn lone_event_without_location_yields_no_clusters() {
    let clusters = aggregate(&[at(1, None)]);
    assert!(clusters.is_empty());
    assert_eq!(clusters.member_count(), 0);
}

#[test]
fn every_located_event_lands_in_exactly_its_own_cluster() {
    let events = mixed_events();
    let clusters = aggregate(&events);

    for (index, event) in events.iter().enumerate() {
        let hits: Vec<_> = clusters
            .iter()
            .filter(|cluster| cluster.members().contains(&index))
            .collect();
        match &event.location {
            Some(location) => {
                assert_eq!(hits.len(), 1, "event {} in {} clusters", event.id, hits.len());
                assert_eq!(hits[0].location_id(), &location.id);
            }
            None => assert!(hits.is_empty(), "event {} has no location", event.id),
        }
    }
}

#[test]
fn counts_are_conserved() {
    let events = mixed_events();
    let clusters = aggregate(&events);
    let without_location = events.iter().filter(|e| e.location.is_none()).count();

    assert_eq!(clusters.member_count() + without_location, events.len());
    assert_eq!(
        clusters.iter().map(|c| c.events(&events).count()).sum::<usize>(),
        clusters.member_count()
    );
}

#[test]
fn clusters_follow_first_occurrence_and_members_follow_input() {
    let events = mixed_events();
    let clusters = aggregate(&events);

    let keys: Vec<_> = clusters.keys().copied().collect();
    assert_eq!(keys, [100, 200, 300]);

    let ids: Vec<_> = clusters
        .get(&100)
        .unwrap()
        .events(&events)
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, [1, 4, 8]);

    let positions: Vec<_> = clusters.positions().collect();
    assert_eq!(
        positions,
        [
            LatLng::new(10.0, 20.0),
            LatLng::new(30.0, 40.0),
            LatLng::new(-5.0, 120.0)
        ]
    );
}

#[test]
fn first_position_wins_for_inconsistent_ids() {
    let events = vec![at(1, Some((9, 1.0, 1.0))), at(2, Some((9, 50.0, 50.0)))];
    let clusters = aggregate(&events);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters.get(&9).unwrap().position(), LatLng::new(1.0, 1.0));
}

#[test]
fn out_of_range_coordinates_pass_through() {
    let events = vec![at(1, Some((1, 200.0, -999.0)))];
    let clusters = aggregate(&events);
    assert_eq!(
        clusters.get(&1).unwrap().position(),
        LatLng::new(200.0, -999.0)
    );
}

/// A caller-owned record that is not an `Event`.
struct Meetup {
    title: &'static str,
    venue: Option<Location<String>>,
}

impl Located for Meetup {
    type LocationId = String;

    fn location(&self) -> Option<&Location<String>> {
        self.venue.as_ref()
    }
}

#[test]
fn custom_records_group_through_located() {
    let library = Location::new(String::from("library"), 59.33, 18.06);
    let meetups = [
        Meetup {
            title: "reading circle",
            venue: Some(library.clone()),
        },
        Meetup {
            title: "online",
            venue: None,
        },
        Meetup {
            title: "study night",
            venue: Some(library),
        },
    ];

    let clusters = aggregate(&meetups);
    let titles: Vec<_> = clusters
        .get(&String::from("library"))
        .unwrap()
        .events(&meetups)
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, ["reading circle", "study night"]);

    // References are `Located` too.
    let borrowed: Vec<&Meetup> = meetups.iter().collect();
    assert_eq!(aggregate(&borrowed).member_count(), 2);
}
