// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue Map: the glue between clustered events and a map renderer.
//!
//! This crate ties the leaf crates together:
//! - `venue_cluster` groups events by location,
//! - `venue_viewport` derives bounds and a fitted camera,
//! - `venue_pane` decides whether the map pane is visible,
//!
//! and hands the result to a renderer through the [`MapRenderAdapter`] trait.
//! Tile fetching and drawing stay on the adapter's side of that boundary.
//!
//! The main types are:
//! - [`EventMap`]: owns the events and caches clusters, bounds, markers and
//!   camera. Rebuilds only when the collection actually changes, and only
//!   re-presents to the adapter when something changed.
//! - [`EventBrowser`]: an [`EventMap`] plus a [`venue_pane::PaneController`],
//!   the object a host layout talks to.
//! - [`MapOptions`]: fit, tile and breakpoint configuration.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use venue_cluster::{Event, Location};
//! use venue_map::{EventBrowser, MapRenderAdapter, Marker};
//! use venue_viewport::{GeoBounds, MapCamera};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     fits: Vec<GeoBounds>,
//!     marker_counts: Vec<usize>,
//! }
//!
//! impl MapRenderAdapter<u32> for Recorder {
//!     fn fit_bounds(&mut self, bounds: GeoBounds, _camera: MapCamera) {
//!         self.fits.push(bounds);
//!     }
//!     fn set_markers(&mut self, markers: &[Marker<u32>]) {
//!         self.marker_counts.push(markers.len());
//!     }
//! }
//!
//! let mut browser = EventBrowser::new(Size::new(800.0, 600.0));
//! browser.set_events(vec![
//!     Event::new(1, Some(Location::new(7_u32, 10.0, 20.0))),
//!     Event::new(2, None),
//! ]);
//!
//! let mut renderer = Recorder::default();
//! assert!(browser.present(&mut renderer));
//! // Nothing changed: no second round trip to the renderer.
//! assert!(!browser.present(&mut renderer));
//! assert_eq!(renderer.marker_counts, [1]);
//! assert!(renderer.fits[0].is_point());
//! ```
//!
//! ## Logging
//!
//! Rebuilds and presentations are reported through `tracing` at `debug`
//! level; skipped work and pane transitions at `trace`. Installing a
//! subscriber is up to the host.

mod adapter;
mod browser;
mod model;
mod options;

pub use adapter::{MapRenderAdapter, Marker, TileSource, markers};
pub use browser::EventBrowser;
pub use model::EventMap;
pub use options::MapOptions;
