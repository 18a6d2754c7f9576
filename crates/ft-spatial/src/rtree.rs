//! R-tree backend via `rstar`.
//!
//! Answers the same closed-ball planar queries as [`KdTree`](crate::KdTree);
//! selectable with `IndexKind::RTree`.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ft_core::{GeoPoint, TrailId};
use tracing::debug;

use crate::{SpatialIndex, SpatialResult, trail_id};

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with its `TrailId`.
#[derive(Clone)]
struct TrailEntry {
    point: [f64; 2], // [lat, lon]
    id:    TrailId,
}

impl RTreeObject for TrailEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TrailEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Bulk-loaded R-tree over the trail points.
pub struct RTreeIndex {
    tree: RTree<TrailEntry>,
}

impl RTreeIndex {
    /// Bulk-load for O(N log N) construction (faster than N inserts).
    pub fn build(points: &[GeoPoint]) -> SpatialResult<Self> {
        let entries = points
            .iter()
            .enumerate()
            .map(|(i, p)| Ok(TrailEntry { point: p.to_array(), id: trail_id(i)? }))
            .collect::<SpatialResult<Vec<TrailEntry>>>()?;
        let tree = RTree::bulk_load(entries);
        debug!(points = tree.size(), "bulk-loaded R-tree");
        Ok(Self { tree })
    }
}

impl SpatialIndex for RTreeIndex {
    fn len(&self) -> usize {
        self.tree.size()
    }

    fn for_each_within(
        &self,
        center:     GeoPoint,
        radius_deg: f64,
        visit:      &mut dyn FnMut(TrailId, GeoPoint),
    ) {
        if radius_deg.is_nan() || radius_deg < 0.0 {
            return;
        }
        // `locate_within_distance` is inclusive: distance_2 <= radius².
        for e in self
            .tree
            .locate_within_distance(center.to_array(), radius_deg * radius_deg)
        {
            visit(e.id, GeoPoint::new(e.point[0], e.point[1]));
        }
    }
}
