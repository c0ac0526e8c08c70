// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue Cluster: group located events into per-location clusters.
//!
//! An event browser that plots events on a map wants one marker per physical
//! place, annotated with how many events happen there. This crate does the
//! bookkeeping for that: it takes a slice of events, drops the ones with no
//! physical location, and groups the rest by location id.
//!
//! The core pieces are:
//! - [`LatLng`] and [`Location`]: a position and an identified place.
//! - [`Located`]: the trait your event records implement so they can be
//!   grouped. [`Event`] is a ready-made record for callers without one.
//! - [`aggregate`]: the location grouping itself, producing
//!   [`LocationClusters`].
//! - [`group_by_key`]: the statically-typed fold `aggregate` is built on, for
//!   grouping by any other key.
//!
//! Clusters store member *indices* into the slice that was grouped, not copies
//! of the events, so they stay cheap to rebuild and hold no borrows. Use
//! [`LocationCluster::events`] to resolve them.
//!
//! ## Minimal example
//!
//! ```rust
//! use venue_cluster::{Event, LatLng, Location, aggregate};
//!
//! let hall = Location::new(1_u32, 10.0, 20.0);
//! let park = Location::new(2_u32, 30.0, 40.0);
//! let events = [
//!     Event::new("meeting", Some(hall.clone())),
//!     Event::new("canvass", Some(park)),
//!     Event::new("call", None),
//!     Event::new("training", Some(hall)),
//! ];
//!
//! let clusters = aggregate(&events);
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters.member_count(), 3);
//!
//! let at_hall = clusters.get(&1).unwrap();
//! assert_eq!(at_hall.position(), LatLng::new(10.0, 20.0));
//! let ids: Vec<_> = at_hall.events(&events).map(|e| e.id).collect();
//! assert_eq!(ids, ["meeting", "training"]);
//! ```
//!
//! Coordinates are passed through uninterpreted. One location id is assumed to
//! always carry the same coordinates; when upstream data breaks that, a
//! cluster keeps the position of its first event.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod group;
mod location;

pub use group::{
    Group, Grouping, LocationCluster, LocationClusters, aggregate, group_by_key,
};
pub use location::{CoordinateError, Event, LatLng, Located, Location};
