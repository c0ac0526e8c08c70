// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use venue_cluster::{LatLng, LocationClusters};

use crate::projection::project;

/// Axis-aligned region in latitude/longitude space.
///
/// The region is stored as its south-west and north-east corners. A region
/// whose corners coincide is a point; [`crate::fit_camera`] handles that case
/// with a default zoom rather than dividing by a zero span.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    /// Minimum latitude and minimum longitude.
    pub south_west: LatLng,
    /// Maximum latitude and maximum longitude.
    pub north_east: LatLng,
}

impl GeoBounds {
    /// The fallback region used when there is nothing to show.
    ///
    /// It spans every valid coordinate, so any in-range position is contained.
    pub const WORLD: Self = Self {
        south_west: LatLng::new(LatLng::MIN_LAT, LatLng::MIN_LNG),
        north_east: LatLng::new(LatLng::MAX_LAT, LatLng::MAX_LNG),
    };

    /// Creates a region from two corners, normalizing them component-wise.
    #[must_use]
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Creates a zero-area region at `point`.
    #[must_use]
    pub const fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Returns the smallest region containing every point, or `None` if the
    /// iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |mut bounds, point| {
            bounds.extend(point);
            bounds
        }))
    }

    /// Grows the region so that it contains `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Returns the smallest region containing both `self` and `other`.
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        self.extend(other.south_west);
        self.extend(other.north_east);
        self
    }

    /// Returns `true` if `point` lies inside or on the edge of the region.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    /// Midpoint of the region in degrees.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) * 0.5,
            (self.south_west.lng + self.north_east.lng) * 0.5,
        )
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    /// Returns `true` if both corners coincide.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }

    /// Grows the region on every side by `ratio` times its span on that axis.
    ///
    /// Padding a point region leaves it a point. Negative ratios are treated
    /// as zero.
    #[must_use]
    pub fn padded(&self, ratio: f64) -> Self {
        let ratio = ratio.max(0.0);
        let dlat = self.lat_span() * ratio;
        let dlng = self.lng_span() * ratio;
        Self {
            south_west: LatLng::new(self.south_west.lat - dlat, self.south_west.lng - dlng),
            north_east: LatLng::new(self.north_east.lat + dlat, self.north_east.lng + dlng),
        }
    }

    /// Projects the region into normalized Web Mercator space.
    ///
    /// The result lives in `[0, 1] x [0, 1]` with `y` growing southwards, so
    /// the north-east corner maps to the minimum `y`.
    #[must_use]
    pub fn to_mercator_rect(&self) -> Rect {
        let sw = project(self.south_west);
        let ne = project(self.north_east);
        Rect::from_points(Point::new(sw.x, ne.y), Point::new(ne.x, sw.y))
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Computes the region a map should show for `clusters`.
///
/// With at least one cluster this is the minimal region enclosing every
/// cluster position; a single cluster gives a zero-area region at its
/// position. With no clusters it is [`GeoBounds::WORLD`].
#[must_use]
pub fn compute_bounds<K>(clusters: &LocationClusters<K>) -> GeoBounds {
    GeoBounds::from_points(clusters.positions()).unwrap_or(GeoBounds::WORLD)
}
