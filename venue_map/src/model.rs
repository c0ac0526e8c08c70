// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use tracing::{debug, trace};
use venue_cluster::{Located, LocationClusters, aggregate};
use venue_viewport::{FitOptions, GeoBounds, MapCamera, MapViewport, compute_bounds};

use crate::adapter::{MapRenderAdapter, Marker, TileSource, markers};

/// Events plus everything derived from them for the map.
///
/// `EventMap` owns the event collection and caches the clusters, bounds,
/// markers and fitted camera. The cache is rebuilt only when
/// [`EventMap::set_events`] receives a collection that differs from the
/// current one, and each rebuild bumps [`EventMap::revision`]. Downstream code
/// can compare revisions to skip redundant work.
///
/// [`EventMap::present`] pushes the cached state to a [`MapRenderAdapter`],
/// again only when something changed since the last presentation.
pub struct EventMap<E: Located> {
    events: Vec<E>,
    clusters: LocationClusters<E::LocationId>,
    bounds: GeoBounds,
    markers: Vec<Marker<E::LocationId>>,
    viewport: MapViewport,
    tiles: TileSource,
    revision: u64,
    view_generation: u64,
    presented: Option<(u64, u64)>,
}

impl<E: Located> core::fmt::Debug for EventMap<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventMap")
            .field("events", &self.events.len())
            .field("clusters", &self.clusters.len())
            .field("bounds", &self.bounds)
            .field("camera", &self.camera())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<E: Located> EventMap<E> {
    /// Creates an empty map model for a view of `view_size` pixels.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self::with_options(view_size, FitOptions::default(), TileSource::default())
    }

    /// Creates an empty map model with explicit fit options and tile source.
    #[must_use]
    pub fn with_options(view_size: Size, fit: FitOptions, tiles: TileSource) -> Self {
        // `MapViewport::with_options` starts fitted to the world, matching
        // the bounds of an empty collection.
        Self {
            events: Vec::new(),
            clusters: LocationClusters::default(),
            bounds: GeoBounds::WORLD,
            markers: Vec::new(),
            viewport: MapViewport::with_options(view_size, fit),
            tiles,
            revision: 0,
            view_generation: 0,
            presented: None,
        }
    }

    /// The current events.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Clusters of [`EventMap::events`] by location.
    #[must_use]
    pub fn clusters(&self) -> &LocationClusters<E::LocationId> {
        &self.clusters
    }

    /// Region enclosing all clusters, or the world when there are none.
    #[must_use]
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// One marker per cluster.
    #[must_use]
    pub fn markers(&self) -> &[Marker<E::LocationId>] {
        &self.markers
    }

    /// Camera fitted to [`EventMap::bounds`] for the current view size.
    #[must_use]
    pub fn camera(&self) -> MapCamera {
        self.viewport.camera()
    }

    /// The viewport used for fitting, for placing overlays in view space.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// The tile source handed to adapters on initialization.
    #[must_use]
    pub fn tiles(&self) -> &TileSource {
        &self.tiles
    }

    /// Returns the current revision counter.
    ///
    /// Bumped once per rebuild of the derived state; stays put while the
    /// event collection is unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resizes the view and refits the camera to the current bounds.
    pub fn set_view_size(&mut self, size: Size) {
        if self.viewport.view_size() == size {
            return;
        }
        self.viewport.set_view_size(size);
        self.refit();
    }

    /// Replaces the fit options and refits the camera.
    pub fn set_fit_options(&mut self, fit: FitOptions) {
        self.viewport.set_options(fit);
        self.refit();
    }

    /// Forgets what was presented, so the next [`EventMap::present`]
    /// reinitializes the adapter and sends everything again.
    pub fn invalidate_presentation(&mut self) {
        self.presented = None;
    }

    /// Pushes bounds, camera and markers to `adapter` if they changed since
    /// the last call. Returns `true` if the adapter was called.
    ///
    /// Changes are tracked by counters rather than by comparing coordinates,
    /// so positions holding `NaN` are presented once like any other.
    pub fn present<A>(&mut self, adapter: &mut A) -> bool
    where
        A: MapRenderAdapter<E::LocationId> + ?Sized,
    {
        let camera = self.camera();
        let current = (self.revision, self.view_generation);
        if self.presented == Some(current) {
            trace!(revision = self.revision, "map already presented");
            return false;
        }

        if self.presented.is_none() {
            adapter.init(&self.tiles);
        }
        adapter.fit_bounds(self.bounds, camera);
        let markers_stale = self.presented.map(|(revision, _)| revision) != Some(self.revision);
        if markers_stale {
            adapter.set_markers(&self.markers);
        }
        self.presented = Some(current);

        debug!(
            revision = self.revision,
            markers = self.markers.len(),
            zoom = camera.zoom,
            markers_sent = markers_stale,
            "presented map"
        );
        true
    }

    fn refit(&mut self) {
        self.viewport.fit_bounds(self.bounds);
        self.view_generation = self.view_generation.wrapping_add(1);
    }

    fn rebuild(&mut self) {
        self.clusters = aggregate(&self.events);
        self.bounds = compute_bounds(&self.clusters);
        self.markers = markers(&self.clusters);
        self.viewport.fit_bounds(self.bounds);
        self.revision = self.revision.wrapping_add(1);

        debug!(
            revision = self.revision,
            events = self.events.len(),
            clusters = self.clusters.len(),
            point = self.bounds.is_point(),
            "rebuilt event clusters"
        );
    }
}

impl<E: Located + PartialEq> EventMap<E> {
    /// Replaces the events. Derived state is rebuilt only if `events` differs
    /// from the current collection by `PartialEq`. Returns `true` if it was
    /// rebuilt.
    ///
    /// [`LatLng`](venue_cluster::LatLng) equality treats bit-identical `NaN`
    /// coordinates as equal, so an unchanged collection with malformed
    /// positions is not rebuilt either.
    pub fn set_events(&mut self, events: Vec<E>) -> bool {
        if self.events == events {
            trace!(
                revision = self.revision,
                events = events.len(),
                "event collection unchanged"
            );
            return false;
        }
        self.events = events;
        self.rebuild();
        true
    }
}
