// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size};
use venue_cluster::LatLng;

use crate::bounds::GeoBounds;
use crate::fit::{FitOptions, MapCamera, fit_camera};
use crate::projection::{project, unproject};

/// A slippy-map view: a pixel-sized window onto the Web Mercator world.
///
/// `MapViewport` owns a [`MapCamera`] and keeps the transforms between
/// geographic positions and view pixels in sync with it. Map render adapters
/// can use it to:
/// - Fit the camera to a [`GeoBounds`] via [`MapViewport::fit_bounds`].
/// - Place markers in view space via [`MapViewport::lat_lng_to_view`].
/// - Convert pointer positions back via [`MapViewport::view_to_lat_lng`].
/// - Query the visible region for culling via [`MapViewport::visible_bounds`].
///
/// View space has its origin at the top-left corner of the view.
#[derive(Clone, Debug)]
pub struct MapViewport {
    view_size: Size,
    camera: MapCamera,
    options: FitOptions,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl MapViewport {
    /// Creates a viewport of `view_size` pixels looking at the whole world.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self::with_options(view_size, FitOptions::default())
    }

    /// Creates a viewport with custom fit options, fitted to [`GeoBounds::WORLD`].
    #[must_use]
    pub fn with_options(view_size: Size, options: FitOptions) -> Self {
        let mut vp = Self {
            view_size,
            camera: MapCamera::default(),
            options,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.fit_bounds(GeoBounds::WORLD);
        vp
    }

    /// Returns the view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size in pixels.
    ///
    /// The camera is kept; only the visible region changes.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.rebuild_transforms();
    }

    /// Returns the current camera.
    #[must_use]
    pub fn camera(&self) -> MapCamera {
        self.camera
    }

    /// Moves the camera, clamping its zoom into the configured range.
    pub fn set_camera(&mut self, camera: MapCamera) {
        let camera = MapCamera::new(camera.center, self.options.clamp_zoom(camera.zoom));
        if self.camera == camera {
            return;
        }
        self.camera = camera;
        self.rebuild_transforms();
    }

    /// Returns the fit options.
    #[must_use]
    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Replaces the fit options. The current zoom is clamped into the new range.
    pub fn set_options(&mut self, options: FitOptions) {
        self.options = options;
        self.set_camera(self.camera);
    }

    /// Fits the camera so that all of `bounds` is visible, and returns it.
    ///
    /// See [`fit_camera`] for how zero-area regions are handled.
    pub fn fit_bounds(&mut self, bounds: GeoBounds) -> MapCamera {
        self.camera = fit_camera(bounds, self.view_size, &self.options);
        self.rebuild_transforms();
        self.camera
    }

    /// Width of the whole world in view pixels at the current zoom.
    #[must_use]
    pub fn world_size(&self) -> f64 {
        self.options.tile_size * 2.0_f64.powf(self.camera.zoom)
    }

    /// Converts a geographic position into view pixels.
    #[must_use]
    pub fn lat_lng_to_view(&self, position: LatLng) -> Point {
        self.world_to_view * project(position)
    }

    /// Converts a view pixel into a geographic position.
    #[must_use]
    pub fn view_to_lat_lng(&self, point: Point) -> LatLng {
        unproject(self.view_to_world * point)
    }

    /// Returns the geographic region currently visible.
    ///
    /// The result is clipped to the projectable world, so views wider than
    /// the world at low zoom still report valid coordinates.
    #[must_use]
    pub fn visible_bounds(&self) -> GeoBounds {
        let view = Rect::from_origin_size(Point::ORIGIN, self.view_size);
        let world = self.view_to_world.transform_rect_bbox(view);
        let world = world.intersect(Rect::new(0.0, 0.0, 1.0, 1.0));
        GeoBounds::new(
            unproject(Point::new(world.x0, world.y1)),
            unproject(Point::new(world.x1, world.y0)),
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        let (min_zoom, max_zoom) = self.options.zoom_range();
        MapViewportDebugInfo {
            view_size: self.view_size,
            camera: self.camera,
            world_size: self.world_size(),
            visible_bounds: self.visible_bounds(),
            min_zoom,
            max_zoom,
        }
    }

    fn rebuild_transforms(&mut self) {
        let scale = self.world_size();
        let view_center = self.view_size.to_vec2() * 0.5;
        let center = project(self.camera.center).to_vec2() * scale;
        // World -> view: scale normalized Mercator to pixels, then move the
        // camera center onto the view center.
        self.world_to_view = Affine::translate(view_center - center) * Affine::scale(scale);
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// View size in pixels.
    pub view_size: Size,
    /// Current camera.
    pub camera: MapCamera,
    /// World width in pixels at the current zoom.
    pub world_size: f64,
    /// Geographic region currently visible.
    pub visible_bounds: GeoBounds,
    /// Minimum zoom.
    pub min_zoom: f64,
    /// Maximum zoom.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use venue_cluster::LatLng;

    use super::MapViewport;
    use crate::bounds::GeoBounds;
    use crate::fit::{FitOptions, MapCamera};

    #[test]
    fn camera_center_is_the_view_center() {
        let mut vp = MapViewport::new(Size::new(800.0, 600.0));
        let at = LatLng::new(48.85, 2.35);
        vp.set_camera(MapCamera::new(at, 10.0));

        let p = vp.lat_lng_to_view(at);
        assert!((p.x - 400.0).abs() < 1e-6);
        assert!((p.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn view_roundtrip() {
        let mut vp = MapViewport::new(Size::new(640.0, 480.0));
        vp.set_camera(MapCamera::new(LatLng::new(-33.87, 151.21), 7.5));

        let pixel = Point::new(17.0, 401.0);
        let back = vp.lat_lng_to_view(vp.view_to_lat_lng(pixel));
        assert!((back.x - pixel.x).abs() < 1e-6);
        assert!((back.y - pixel.y).abs() < 1e-6);
    }

    #[test]
    fn fitted_bounds_are_visible() {
        let mut vp = MapViewport::new(Size::new(800.0, 600.0));
        let bounds = GeoBounds::new(LatLng::new(10.0, 20.0), LatLng::new(30.0, 40.0));
        vp.fit_bounds(bounds);

        let visible = vp.visible_bounds();
        assert!(visible.contains(bounds.south_west));
        assert!(visible.contains(bounds.north_east));

        // Markers for the corners land inside the view.
        for corner in [bounds.south_west, bounds.north_east] {
            let p = vp.lat_lng_to_view(corner);
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
        }
    }

    #[test]
    fn north_is_up() {
        let mut vp = MapViewport::new(Size::new(400.0, 400.0));
        vp.set_camera(MapCamera::new(LatLng::new(0.0, 0.0), 3.0));
        let north = vp.lat_lng_to_view(LatLng::new(10.0, 0.0));
        let east = vp.lat_lng_to_view(LatLng::new(0.0, 10.0));
        assert!(north.y < 200.0);
        assert!(east.x > 200.0);
    }

    #[test]
    fn zoom_is_clamped_and_options_reclamp() {
        let mut vp = MapViewport::new(Size::new(400.0, 400.0));
        vp.set_camera(MapCamera::new(LatLng::new(0.0, 0.0), 40.0));
        assert_eq!(vp.camera().zoom, 18.0);

        vp.set_options(FitOptions::default().with_zoom_limits(0.0, 12.0));
        assert_eq!(vp.camera().zoom, 12.0);
    }

    #[test]
    fn misordered_config_limits_do_not_panic() {
        let mut options = FitOptions::default();
        options.min_zoom = 12.0;
        options.max_zoom = 3.0;
        let mut vp = MapViewport::with_options(Size::new(800.0, 600.0), options);
        assert_eq!(vp.camera().zoom, 3.0);
        vp.set_camera(MapCamera::new(LatLng::new(0.0, 0.0), 20.0));
        assert_eq!(vp.camera().zoom, 12.0);

        options.max_zoom = f64::NAN;
        let vp = MapViewport::with_options(Size::new(800.0, 600.0), options);
        assert_eq!(vp.camera().zoom, 12.0);
        let info = vp.debug_info();
        assert_eq!((info.min_zoom, info.max_zoom), (12.0, f64::INFINITY));
    }

    #[test]
    fn resizing_keeps_the_camera() {
        let mut vp = MapViewport::new(Size::new(400.0, 400.0));
        let camera = vp.fit_bounds(GeoBounds::from_point(LatLng::new(5.0, 5.0)));
        vp.set_view_size(Size::new(1000.0, 200.0));
        assert_eq!(vp.camera(), camera);
        let p = vp.lat_lng_to_view(LatLng::new(5.0, 5.0));
        assert!((p.x - 500.0).abs() < 1e-6);
        assert!((p.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn debug_info_reports_state() {
        let vp = MapViewport::new(Size::new(800.0, 600.0));
        let info = vp.debug_info();
        assert_eq!(info.view_size, Size::new(800.0, 600.0));
        assert_eq!(info.camera.zoom, 1.0);
        assert_eq!(info.world_size, 512.0);
        assert!(info.min_zoom <= info.max_zoom);
    }
}
