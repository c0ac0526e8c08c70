// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue Viewport: map bounds and camera fitting for clustered events.
//!
//! Given the clusters from `venue_cluster`, this crate answers two questions:
//! - Which geographic region should the map show? See [`compute_bounds`] and
//!   [`GeoBounds`].
//! - Which camera (center + zoom) shows that region in a view of a given pixel
//!   size? See [`fit_camera`] and the stateful [`MapViewport`].
//!
//! It does **not** draw anything. Tile fetching and rendering belong to the
//! map render adapter a host plugs in; this crate only does the geometry that
//! adapter needs, in spherical Web Mercator ([`project`] / [`unproject`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use venue_cluster::{Event, LatLng, Location, aggregate};
//! use venue_viewport::{FitOptions, GeoBounds, compute_bounds, fit_camera};
//!
//! let events = [
//!     Event::new(1, Some(Location::new('a', 10.0, 20.0))),
//!     Event::new(2, Some(Location::new('a', 10.0, 20.0))),
//!     Event::new(3, Some(Location::new('b', 30.0, 40.0))),
//! ];
//! let bounds = compute_bounds(&aggregate(&events));
//! assert_eq!(bounds.south_west, LatLng::new(10.0, 20.0));
//! assert_eq!(bounds.north_east, LatLng::new(30.0, 40.0));
//!
//! let camera = fit_camera(bounds, Size::new(800.0, 600.0), &FitOptions::default());
//! assert!(camera.zoom > 0.0);
//!
//! // No clusters: fall back to the whole world.
//! let none: [Event<u32, char>; 0] = [];
//! assert_eq!(compute_bounds(&aggregate(&none)), GeoBounds::WORLD);
//! ```
//!
//! ## Degenerate regions
//!
//! A single cluster gives a zero-area region. There is no scale that fits a
//! point, so [`fit_camera`] centers on it and uses
//! [`FitOptions::point_zoom`]. An empty view gets the same treatment.
//!
//! Coordinates are not validated; out-of-range input yields a region that
//! may not be meaningful, but never a panic.
//!
//! This crate is `no_std`. Enable the `libm` feature instead of `std` for
//! the projection math on targets without the standard library.

#![no_std]

mod bounds;
mod fit;
mod projection;
mod viewport;

pub use bounds::{GeoBounds, compute_bounds};
pub use fit::{FitOptions, MapCamera, fit_camera};
pub use projection::{MAX_MERCATOR_LAT, project, unproject};
pub use viewport::{MapViewport, MapViewportDebugInfo};
