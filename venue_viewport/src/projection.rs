// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spherical Web Mercator in normalized `[0, 1]` world units.

use core::f64::consts::{E, FRAC_PI_2, PI};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use venue_cluster::LatLng;

/// Latitude at which Web Mercator maps to a square world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Projects `position` into normalized Web Mercator space.
///
/// `x` runs west to east over `[0, 1]`, `y` north to south over `[0, 1]`.
/// Latitudes beyond [`MAX_MERCATOR_LAT`] are clamped to it.
#[must_use]
pub fn project(position: LatLng) -> Point {
    let lat = position
        .lat
        .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
        .to_radians();
    let sin = lat.sin();
    let x = (position.lng + 180.0) / 360.0;
    let y = 0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI);
    Point::new(x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(point: Point) -> LatLng {
    let lng = point.x * 360.0 - 180.0;
    // Inverse Gudermannian: 2 atan(e^t) - pi/2.
    let t = PI * (1.0 - 2.0 * point.y);
    let lat = (2.0 * E.powf(t).atan2(1.0) - FRAC_PI_2).to_degrees();
    LatLng::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use venue_cluster::LatLng;

    use super::{MAX_MERCATOR_LAT, project, unproject};

    #[test]
    fn origin_maps_to_the_middle() {
        let p = project(LatLng::new(0.0, 0.0));
        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mercator_limit_maps_to_the_edges() {
        let top = project(LatLng::new(MAX_MERCATOR_LAT, -180.0));
        let bottom = project(LatLng::new(-90.0, 180.0));
        assert!(top.x.abs() < 1e-12 && top.y.abs() < 1e-9);
        assert!((bottom.x - 1.0).abs() < 1e-12 && (bottom.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unproject_inverts_project() {
        for (lat, lng) in [(59.33, 18.06), (-33.87, 151.21), (0.0, -179.5)] {
            let back = unproject(project(LatLng::new(lat, lng)));
            assert!((back.lat - lat).abs() < 1e-9);
            assert!((back.lng - lng).abs() < 1e-9);
        }
        let center = unproject(Point::new(0.5, 0.5));
        assert!(center.lat.abs() < 1e-12 && center.lng.abs() < 1e-12);
    }
}
