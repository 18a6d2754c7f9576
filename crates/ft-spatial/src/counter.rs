//! Per-festival proximity counting.
//!
//! One index query per festival.  Queries only read the index, so with the
//! `parallel` feature they run on Rayon's pool; results are collected in
//! input order either way.

use ft_core::{EnrichedFestival, FestivalRecord, GeoPoint};

use crate::{DistanceMetric, SpatialIndex};

/// Counts indexed trails around each festival with a fixed metric and radius.
pub struct ProximityCounter<'a> {
    index:     &'a dyn SpatialIndex,
    metric:    &'a dyn DistanceMetric,
    radius_km: f64,
}

impl<'a> ProximityCounter<'a> {
    pub fn new(index: &'a dyn SpatialIndex, metric: &'a dyn DistanceMetric, radius_km: f64) -> Self {
        Self { index, metric, radius_km }
    }

    /// Trails within the radius of `point`.  Always 0 for an empty index.
    pub fn count(&self, point: GeoPoint) -> u32 {
        if self.index.is_empty() {
            return 0;
        }
        let n = self.metric.count(self.index, point, self.radius_km);
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Pair every festival with its count, preserving input order.
    pub fn enrich(&self, festivals: Vec<FestivalRecord>) -> Vec<EnrichedFestival> {
        #[cfg(not(feature = "parallel"))]
        {
            festivals
                .into_iter()
                .map(|f| {
                    let n = self.count(f.point);
                    EnrichedFestival::new(f, n)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed parallel iterators keep input order on collect.
            festivals
                .into_par_iter()
                .map(|f| {
                    let n = self.count(f.point);
                    EnrichedFestival::new(f, n)
                })
                .collect()
        }
    }
}
