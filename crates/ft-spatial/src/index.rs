//! The `SpatialIndex` trait shared by every index backend.

use ft_core::{GeoPoint, IndexKind, TrailId};

use crate::{KdTree, RTreeIndex, SpatialError, SpatialResult};

/// A fixed 2-D point set supporting radius queries.
///
/// Distances are planar Euclidean in `(lat, lon)` degree space and the ball
/// is closed: a point exactly `radius_deg` away is inside.  Implementations
/// are immutable after construction, so one index can serve concurrent
/// queries.
pub trait SpatialIndex: Send + Sync {
    /// Number of indexed points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `visit` once for every indexed point with
    /// `planar_distance(center, p) <= radius_deg`, in unspecified order.
    ///
    /// A negative or NaN radius matches nothing.
    fn for_each_within(
        &self,
        center:     GeoPoint,
        radius_deg: f64,
        visit:      &mut dyn FnMut(TrailId, GeoPoint),
    );

    /// Number of indexed points within `radius_deg` of `center`.
    fn count_within(&self, center: GeoPoint, radius_deg: f64) -> usize {
        let mut n = 0usize;
        self.for_each_within(center, radius_deg, &mut |_, _| n += 1);
        n
    }
}

/// Build the backend selected by `kind` over `points`.
///
/// `TrailId(i)` refers to `points[i]`.
pub fn build_index(kind: IndexKind, points: &[GeoPoint]) -> SpatialResult<Box<dyn SpatialIndex>> {
    Ok(match kind {
        IndexKind::KdTree => Box::new(KdTree::build(points)?),
        IndexKind::RTree  => Box::new(RTreeIndex::build(points)?),
    })
}

/// Id of the point at position `i`, failing once positions no longer fit
/// in a `u32`.
pub fn trail_id(i: usize) -> SpatialResult<TrailId> {
    TrailId::try_from(i).map_err(|_| SpatialError::TooManyPoints { count: i.saturating_add(1), max: u32::MAX })
}
