// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;
use venue_cluster::LatLng;

use crate::bounds::GeoBounds;
use crate::projection::unproject;

/// Where a map looks and how far it is zoomed in.
///
/// `zoom` follows the slippy-map convention: at zoom `z` the world is
/// `tile_size * 2^z` pixels wide.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapCamera {
    /// Position at the center of the view.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: f64,
}

impl MapCamera {
    /// Creates a camera.
    #[must_use]
    pub const fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0)
    }
}

/// Knobs for [`fit_camera`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitOptions {
    /// Extra room around the bounds, as a fraction of their span per side.
    pub padding: f64,
    /// Lowest zoom a fit may choose.
    pub min_zoom: f64,
    /// Highest zoom a fit may choose.
    pub max_zoom: f64,
    /// Zoom used when the bounds have no area, for example a single location.
    pub point_zoom: f64,
    /// Round fitted zoom levels down to whole numbers so tiles render crisp.
    pub snap_to_integer: bool,
    /// Edge length of one map tile in view pixels.
    pub tile_size: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            min_zoom: 0.0,
            max_zoom: 18.0,
            point_zoom: 13.0,
            snap_to_integer: true,
            tile_size: 256.0,
        }
    }
}

impl FitOptions {
    /// Sets [`FitOptions::padding`].
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the zoom range, normalized so that `min <= max`.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets [`FitOptions::point_zoom`].
    #[must_use]
    pub fn with_point_zoom(mut self, zoom: f64) -> Self {
        self.point_zoom = zoom;
        self
    }

    /// Sets [`FitOptions::snap_to_integer`].
    #[must_use]
    pub fn with_snap_to_integer(mut self, snap: bool) -> Self {
        self.snap_to_integer = snap;
        self
    }

    /// The usable zoom range as `(min, max)`.
    ///
    /// The fields are public and may come from a config file, so they are
    /// put in order here. A `NaN` limit leaves that side unbounded.
    #[must_use]
    pub fn zoom_range(&self) -> (f64, f64) {
        let lo = if self.min_zoom.is_nan() {
            f64::NEG_INFINITY
        } else {
            self.min_zoom
        };
        let hi = if self.max_zoom.is_nan() {
            f64::INFINITY
        } else {
            self.max_zoom
        };
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }

    /// Clamps `zoom` into [`FitOptions::zoom_range`].
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let (lo, hi) = self.zoom_range();
        zoom.clamp(lo, hi)
    }
}

/// Chooses the camera that shows all of `bounds` in a view of `view_size` pixels.
///
/// The bounds are padded, projected to Web Mercator and centered. The zoom is
/// the largest one at which the projected box fits on both axes, then clamped
/// to the configured range and optionally rounded down.
///
/// A zero-area region, or a view with no area, cannot be fitted by scale; the
/// camera then centers on the region with [`FitOptions::point_zoom`]. A region
/// that is a line (zero span on one axis only) is fitted on the other axis.
#[must_use]
pub fn fit_camera(bounds: GeoBounds, view_size: Size, options: &FitOptions) -> MapCamera {
    let rect = bounds.padded(options.padding).to_mercator_rect();
    let center = unproject(rect.center());

    let view_ok = view_size.width > 0.0 && view_size.height > 0.0;
    let tile_size = options.tile_size.max(f64::MIN_POSITIVE);

    // World widths (in tiles of `tile_size`) that fit each axis.
    let fit_x = (rect.width() > 0.0).then(|| view_size.width / (rect.width() * tile_size));
    let fit_y = (rect.height() > 0.0).then(|| view_size.height / (rect.height() * tile_size));

    let scale = match (fit_x, fit_y) {
        _ if !view_ok => None,
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(s), None) | (None, Some(s)) => Some(s),
        (None, None) => None,
    };

    let zoom = match scale {
        Some(scale) => {
            let zoom = options.clamp_zoom(scale.log2());
            if options.snap_to_integer {
                // Flooring can step below a fractional minimum; clamp again.
                options.clamp_zoom(zoom.floor())
            } else {
                zoom
            }
        }
        None => options.clamp_zoom(options.point_zoom),
    };

    MapCamera::new(center, zoom)
}
