// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use venue_cluster::{LatLng, LocationClusters};
use venue_viewport::{GeoBounds, MapCamera};

/// One map marker per location cluster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker<K> {
    /// Location the marker stands for.
    pub location_id: K,
    /// Where to place it.
    pub position: LatLng,
    /// Number of events at the location. Always at least 1.
    pub cluster_size: usize,
}

/// Builds one marker per cluster, in cluster order.
#[must_use]
pub fn markers<K: Clone>(clusters: &LocationClusters<K>) -> Vec<Marker<K>> {
    clusters
        .iter()
        .map(|cluster| Marker {
            location_id: cluster.location_id().clone(),
            position: cluster.position(),
            cluster_size: cluster.len(),
        })
        .collect()
}

/// Where map tiles come from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSource {
    /// URL with `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    /// Attribution text the renderer must display.
    pub attribution: String,
}

impl TileSource {
    /// Creates a tile source.
    pub fn new(url_template: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: attribution.into(),
        }
    }

    /// The public OpenStreetMap tile server.
    #[must_use]
    pub fn openstreetmap() -> Self {
        Self::new(
            "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            "\u{a9} OpenStreetMap contributors",
        )
    }

    /// Expands the template for one tile.
    #[must_use]
    pub fn tile_url(&self, z: u32, x: u32, y: u32) -> String {
        self.url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

/// The boundary to a map renderer.
///
/// Implementations own tiles, drawing and interaction. They receive the
/// region to show, a fitted camera and the cluster markers, and must accept:
/// - the world region [`GeoBounds::WORLD`] when there are no clusters,
/// - a zero-area region when there is exactly one.
///
/// Calls arrive in the order `init` (once per (re)initialization),
/// `fit_bounds`, then `set_markers` when the markers changed.
pub trait MapRenderAdapter<K> {
    /// Prepares the renderer with a tile source.
    fn init(&mut self, tiles: &TileSource) {
        let _ = tiles;
    }

    /// Moves the view so that `bounds` is visible. `camera` is the fit
    /// computed for the current view size; renderers may use it directly or
    /// refit `bounds` themselves.
    fn fit_bounds(&mut self, bounds: GeoBounds, camera: MapCamera);

    /// Replaces all markers.
    fn set_markers(&mut self, markers: &[Marker<K>]);
}

impl<K, A: MapRenderAdapter<K> + ?Sized> MapRenderAdapter<K> for &mut A {
    fn init(&mut self, tiles: &TileSource) {
        (**self).init(tiles);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, camera: MapCamera) {
        (**self).fit_bounds(bounds, camera);
    }

    fn set_markers(&mut self, markers: &[Marker<K>]) {
        (**self).set_markers(markers);
    }
}

#[cfg(test)]
mod tests {
    use venue_cluster::{Event, LatLng, Location, aggregate};

    use super::{Marker, TileSource, markers};

    #[test]
    fn markers_carry_cluster_sizes_in_order() {
        let events = [
            Event::new(1, Some(Location::new("b", 1.0, 2.0))),
            Event::new(2, Some(Location::new("a", 3.0, 4.0))),
            Event::new(3, Some(Location::new("b", 1.0, 2.0))),
            Event::new(4, None),
        ];
        let markers = markers(&aggregate(&events));
        assert_eq!(
            markers,
            [
                Marker {
                    location_id: "b",
                    position: LatLng::new(1.0, 2.0),
                    cluster_size: 2,
                },
                Marker {
                    location_id: "a",
                    position: LatLng::new(3.0, 4.0),
                    cluster_size: 1,
                },
            ]
        );
    }

    #[test]
    fn tile_url_expands_placeholders() {
        let tiles = TileSource::default();
        assert_eq!(
            tiles.tile_url(3, 4, 2),
            "https://tile.openstreetmap.org/3/4/2.png"
        );
        assert!(tiles.attribution.contains("OpenStreetMap"));

        let custom = TileSource::new("https://t.example/{z}-{y}-{x}", "Example");
        assert_eq!(custom.tile_url(1, 0, 1), "https://t.example/1-1-0");
    }
}
