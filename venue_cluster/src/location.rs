// Copyright 2026 the Venue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

/// A geographic position in degrees.
///
/// Coordinates are not validated on construction. Aggregation and bounds
/// computation pass them through as-is; callers that receive untrusted data
/// can use [`LatLng::validate`] or [`LatLng::clamped`] upstream.
///
/// Positions compare equal when their components are numerically equal or
/// bit-identical, so a position holding `NaN` still equals an unchanged copy
/// of itself.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, valid range `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, valid range `[-180, 180]`.
    pub lng: f64,
}

impl LatLng {
    /// Smallest valid latitude.
    pub const MIN_LAT: f64 = -90.0;
    /// Largest valid latitude.
    pub const MAX_LAT: f64 = 90.0;
    /// Smallest valid longitude.
    pub const MIN_LNG: f64 = -180.0;
    /// Largest valid longitude.
    pub const MAX_LNG: f64 = 180.0;

    /// Creates a position from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both components are finite and inside their valid ranges.
    pub fn validate(self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(Self::MIN_LAT..=Self::MAX_LAT).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange(self.lat));
        }
        if !(Self::MIN_LNG..=Self::MAX_LNG).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }

    /// Returns `true` if [`LatLng::validate`] would succeed.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    /// Returns a copy with each component clamped into its valid range.
    ///
    /// Non-finite components are not repaired; `NaN` stays `NaN`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            lat: self.lat.clamp(Self::MIN_LAT, Self::MAX_LAT),
            lng: self.lng.clamp(Self::MIN_LNG, Self::MAX_LNG),
        }
    }
}

impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        fn same(a: f64, b: f64) -> bool {
            a == b || a.to_bits() == b.to_bits()
        }
        same(self.lat, other.lat) && same(self.lng, other.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Reason a [`LatLng`] failed [`LatLng::validate`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// Latitude outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// One of the components is `NaN` or infinite.
    #[error("coordinate is not finite")]
    NotFinite,
}

/// A distinct physical place events can happen at.
///
/// The identifier `K` is the grouping key: two locations with equal ids are
/// assumed to share the same position. Upstream data must uphold that; when
/// it does not, clusters keep the position of the first event seen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location<K> {
    /// Identity of this place.
    pub id: K,
    /// Where it is.
    pub position: LatLng,
}

impl<K> Location<K> {
    /// Creates a location from an id and coordinates in degrees.
    #[must_use]
    pub const fn new(id: K, lat: f64, lng: f64) -> Self {
        Self {
            id,
            position: LatLng::new(lat, lng),
        }
    }
}

/// Anything that may have a physical [`Location`].
///
/// Implement this for your own event records to feed them to
/// [`aggregate`](crate::aggregate) without converting them into [`Event`].
pub trait Located {
    /// Identity type of the location, used as the grouping key.
    type LocationId: Eq + Hash + Clone;

    /// The location of this item, or `None` if it has no physical place.
    fn location(&self) -> Option<&Location<Self::LocationId>>;
}

impl<T: Located> Located for &T {
    type LocationId = T::LocationId;

    fn location(&self) -> Option<&Location<Self::LocationId>> {
        (**self).location()
    }
}

/// A minimal event record: an id, an optional location, and opaque metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event<I, K, M = ()> {
    /// Identity of the event.
    pub id: I,
    /// Where the event happens, if anywhere.
    pub location: Option<Location<K>>,
    /// Caller data the clustering core never looks at.
    pub metadata: M,
}

impl<I, K> Event<I, K> {
    /// Creates an event without metadata.
    #[must_use]
    pub const fn new(id: I, location: Option<Location<K>>) -> Self {
        Self {
            id,
            location,
            metadata: (),
        }
    }
}

impl<I, K, M> Event<I, K, M> {
    /// Replaces the metadata, keeping id and location.
    #[must_use]
    pub fn with_metadata<N>(self, metadata: N) -> Event<I, K, N> {
        Event {
            id: self.id,
            location: self.location,
            metadata,
        }
    }
}

impl<I, K: Eq + Hash + Clone, M> Located for Event<I, K, M> {
    type LocationId = K;

    fn location(&self) -> Option<&Location<K>> {
        self.location.as_ref()
    }
}
