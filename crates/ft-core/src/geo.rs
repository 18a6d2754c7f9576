//! Geographic coordinate type and distance helpers.
//!
//! `GeoPoint` stores `f64` latitude/longitude.  Proximity counts are compared
//! against a radius expressed in planar degrees, so single precision would
//! shift points sitting exactly on the radius boundary.

/// Kilometres per degree of latitude used for the planar radius conversion.
///
/// Applied uniformly to latitude *and* longitude; see [`km_to_planar_degrees`].
pub const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Convert a radius in kilometres to the planar-degree radius used by the
/// spatial index.
///
/// This ignores the shrinking length of a longitude degree away from the
/// equator.  Output parity with the published rankings depends on it.
#[inline]
pub fn km_to_planar_degrees(radius_km: f64) -> f64 {
    radius_km / KM_PER_DEGREE
}

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when latitude lies in `[-90, 90]` and longitude in `[-180, 180]`.
    ///
    /// NaN fails both comparisons and is therefore invalid.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Squared Euclidean distance in `(lat, lon)` degree space.
    #[inline]
    pub fn planar_distance_2(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Haversine great-circle distance in kilometres.
    pub fn haversine_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// As `[lat, lon]`, the layout both index backends store.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
