//! Two-dimensional k-d tree.
//!
//! # Data layout
//!
//! The tree is implicit: nodes live in one flat `Vec` and the root of any
//! subtree occupying `nodes[lo..hi]` is `nodes[lo + (hi - lo) / 2]`.  Its left
//! subtree is `nodes[lo..mid]`, its right subtree `nodes[mid + 1..hi]`.  The
//! split axis alternates with depth: latitude at even depths, longitude at odd
//! depths.
//!
//! ```text
//!           lo          mid          hi
//!   nodes: [ left ≤ pivot | pivot | right ≥ pivot ]
//! ```
//!
//! No child pointers are stored, so the index is exactly `N` entries.

use ft_core::{GeoPoint, TrailId};
use tracing::debug;

use crate::{SpatialIndex, SpatialResult, trail_id};

#[derive(Clone, Copy, Debug)]
struct KdNode {
    point: [f64; 2], // [lat, lon]
    id:    TrailId,
}

/// Immutable k-d tree over a point set, built once by median partitioning.
pub struct KdTree {
    nodes: Vec<KdNode>,
}

impl KdTree {
    /// Build the tree.  `TrailId(i)` refers to `points[i]`.
    ///
    /// Time complexity: O(N log N), one linear-time median selection per
    /// tree level.
    ///
    /// Fails with [`SpatialError::TooManyPoints`](crate::SpatialError) when
    /// `points` has more than `u32::MAX` entries.
    pub fn build(points: &[GeoPoint]) -> SpatialResult<Self> {
        let mut nodes = points
            .iter()
            .enumerate()
            .map(|(i, p)| Ok(KdNode { point: p.to_array(), id: trail_id(i)? }))
            .collect::<SpatialResult<Vec<KdNode>>>()?;

        partition(&mut nodes, 0);
        debug!(points = nodes.len(), "built k-d tree");

        Ok(Self { nodes })
    }

    /// Depth-first radius search over the subtree `nodes[lo..hi]`.
    fn search(
        &self,
        lo:     usize,
        hi:     usize,
        depth:  usize,
        center: [f64; 2],
        radius: f64,
        visit:  &mut dyn FnMut(TrailId, GeoPoint),
    ) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        let node = self.nodes[mid];

        let dlat = node.point[0] - center[0];
        let dlon = node.point[1] - center[1];
        if dlat * dlat + dlon * dlon <= radius * radius {
            visit(node.id, GeoPoint::new(node.point[0], node.point[1]));
        }

        // Signed distance from the query to the split plane.
        let axis = depth % 2;
        let delta = center[axis] - node.point[axis];

        // Left holds coordinates ≤ pivot: reachable unless the query sits
        // more than `radius` beyond the plane on the right side.
        if delta <= radius {
            self.search(lo, mid, depth + 1, center, radius, visit);
        }
        if delta >= -radius {
            self.search(mid + 1, hi, depth + 1, center, radius, visit);
        }
    }
}

/// Arrange `nodes` in place into implicit k-d order.
fn partition(nodes: &mut [KdNode], depth: usize) {
    if nodes.len() <= 1 {
        return;
    }
    let axis = depth % 2;
    let mid = nodes.len() / 2;
    nodes.select_nth_unstable_by(mid, |a, b| a.point[axis].total_cmp(&b.point[axis]));

    let (left, rest) = nodes.split_at_mut(mid);
    partition(left, depth + 1);
    partition(&mut rest[1..], depth + 1);
}

impl SpatialIndex for KdTree {
    fn len(&self) -> usize {
        self.nodes.len()
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
        self.search(0, self.nodes.len(), 0, center.to_array(), radius_deg, visit);
    }
}
