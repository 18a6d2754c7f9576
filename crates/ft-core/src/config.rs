//! Run configuration.
//!
//! Typically loaded from a TOML file and command-line flags by the binary and
//! passed to the pipeline builder.

use std::fmt;

use crate::geo::km_to_planar_degrees;
use crate::{CoreError, CoreResult};

/// How "within the radius" is decided.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MetricKind {
    /// Euclidean distance in degree space against `radius_km / 111`.
    #[default]
    Planar,
    /// Great-circle distance against `radius_km`.
    Haversine,
}

/// Which spatial index backend holds the trail set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexKind {
    #[default]
    KdTree,
    RTree,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Planar    => f.write_str("planar"),
            MetricKind::Haversine => f.write_str("haversine"),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::KdTree => f.write_str("kdtree"),
            IndexKind::RTree  => f.write_str("rtree"),
        }
    }
}

/// Parameters of one proximity-ranking run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ProximityConfig {
    /// Search radius in kilometres.  Default: 10.
    pub radius_km: f64,

    /// Rows kept in the festival ranking.  Default: 20.
    pub top_festivals: usize,

    /// Rows kept in the commune ranking.  Default: 10.
    pub top_communes: usize,

    pub metric: MetricKind,

    pub index: IndexKind,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            radius_km:     10.0,
            top_festivals: 20,
            top_communes:  10,
            metric:        MetricKind::Planar,
            index:         IndexKind::KdTree,
        }
    }
}

impl ProximityConfig {
    /// Radius converted to planar degrees (`radius_km / 111`).
    #[inline]
    pub fn radius_degrees(&self) -> f64 {
        km_to_planar_degrees(self.radius_km)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(CoreError::Config(format!(
                "radius_km must be a finite non-negative number, got {}",
                self.radius_km
            )));
        }
        if self.top_festivals == 0 {
            return Err(CoreError::Config("top_festivals must be at least 1".into()));
        }
        if self.top_communes == 0 {
            return Err(CoreError::Config("top_communes must be at least 1".into()));
        }
        Ok(())
    }
}
