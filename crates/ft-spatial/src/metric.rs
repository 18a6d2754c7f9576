//! Strategies deciding whether a trail counts as "nearby".
//!
//! [`PlanarDegrees`] is the default and reproduces the published rankings:
//! the radius in kilometres is divided by 111 and compared against planar
//! distance in degree space, at every latitude.  A degree of longitude is
//! much shorter than 111 km in France, so east–west reach is smaller than
//! the nominal radius.
//! [`Haversine`] is the opt-in great-circle alternative.

use std::f64::consts::PI;

use ft_core::geo::EARTH_RADIUS_KM;
use ft_core::{GeoPoint, MetricKind, km_to_planar_degrees};

use crate::SpatialIndex;

/// Counts the indexed points within `radius_km` of a center.
pub trait DistanceMetric: Send + Sync {
    fn count(&self, index: &dyn SpatialIndex, center: GeoPoint, radius_km: f64) -> usize;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Planar Euclidean distance against `radius_km / 111` degrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanarDegrees;

impl DistanceMetric for PlanarDegrees {
    fn count(&self, index: &dyn SpatialIndex, center: GeoPoint, radius_km: f64) -> usize {
        index.count_within(center, km_to_planar_degrees(radius_km))
    }

    fn name(&self) -> &'static str {
        "planar"
    }
}

/// Great-circle distance against `radius_km`.
///
/// The index is searched with a planar radius wide enough to contain every
/// point within `radius_km`, then candidates are filtered exactly.  Points on
/// the far side of the antimeridian are not found.
#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

/// Degrees of latitude per kilometre on the mean sphere.
const DEG_PER_KM: f64 = 180.0 / (PI * EARTH_RADIUS_KM);

/// Larger than any planar distance between two valid points.
const WHOLE_GLOBE_DEG: f64 = 450.0;

impl Haversine {
    /// Planar search radius guaranteed to enclose the great-circle disc.
    fn candidate_radius_deg(center: GeoPoint, radius_km: f64) -> f64 {
        let dlat = radius_km * DEG_PER_KM;
        let lat_max = center.lat.abs() + dlat;
        if lat_max >= 89.999 {
            return WHOLE_GLOBE_DEG;
        }
        let dlon = dlat / lat_max.to_radians().cos();
        (dlat * dlat + dlon * dlon).sqrt() * (1.0 + 1e-9)
    }
}

impl DistanceMetric for Haversine {
    fn count(&self, index: &dyn SpatialIndex, center: GeoPoint, radius_km: f64) -> usize {
        let mut n = 0usize;
        index.for_each_within(
            center,
            Self::candidate_radius_deg(center, radius_km),
            &mut |_, p| {
                if center.haversine_km(p) <= radius_km {
                    n += 1;
                }
            },
        );
        n
    }

    fn name(&self) -> &'static str {
        "haversine"
    }
}

/// The strategy selected by `kind`.
pub fn metric_for(kind: MetricKind) -> Box<dyn DistanceMetric> {
    match kind {
        MetricKind::Planar    => Box::new(PlanarDegrees),
        MetricKind::Haversine => Box::new(Haversine),
    }
}
