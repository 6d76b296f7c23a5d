//! Geographic coordinate type and great-circle distance.
//!
//! Route geometry arrives from an upstream mapping service as `(lat, lng)`
//! pairs in degrees.  Distances are measured in statute miles because every
//! other quantity in a duty log (fuel interval, daily mileage) is.

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A WGS-84 coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// `(0, 0)` sentinel meaning "no position available".
    pub const UNKNOWN: GeoPoint = GeoPoint { lat: 0.0, lng: 0.0 };

    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` for the [`GeoPoint::UNKNOWN`] sentinel.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Haversine great-circle distance in miles on a spherical Earth.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// Linear interpolation in degree space; `t` is clamped to `[0, 1]`.
    ///
    /// Adequate for the short segments of a routed polyline.  Not a geodesic.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        let t = t.clamp(0.0, 1.0);
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
