//! Unit tests for ft-spatial.
//!
//! Every backend is checked against a brute-force scan of the same points.

#[cfg(test)]
mod helpers {
    use ft_core::GeoPoint;

    /// Reference count: linear scan with the same closed-ball predicate.
    pub fn brute_force(points: &[GeoPoint], center: GeoPoint, radius_deg: f64) -> usize {
        points
            .iter()
            .filter(|p| p.planar_distance_2(center) <= radius_deg * radius_deg)
            .count()
    }

    /// A 5 × 5 grid with 0.1° spacing starting at (45.0, 5.0).
    pub fn grid() -> Vec<GeoPoint> {
        let mut v = Vec::new();
        for i in 0..5 {
            for j in 0..5 {
                v.push(GeoPoint::new(45.0 + i as f64 * 0.1, 5.0 + j as f64 * 0.1));
            }
        }
        v
    }
}

// ── ids ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use ft_core::TrailId;

    use crate::{SpatialError, trail_id};

    #[test]
    fn positions_up_to_u32_max_map_to_ids() {
        assert_eq!(trail_id(0).unwrap(), TrailId(0));
        assert_eq!(trail_id(u32::MAX as usize).unwrap(), TrailId(u32::MAX));
    }

    #[test]
    fn position_past_u32_max_is_rejected() {
        let err = trail_id(u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(
            err,
            SpatialError::TooManyPoints { count, max: u32::MAX } if count == u32::MAX as usize + 2
        ));
    }
}

// ── k-d tree ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kdtree {
    use ft_core::{GeoPoint, TrailId};

    use crate::{KdTree, SpatialIndex};

    #[test]
    fn empty_tree_counts_zero() {
        let t = KdTree::build(&[]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.count_within(GeoPoint::new(48.0, 2.0), 10.0), 0);
    }

    #[test]
    fn single_point() {
        let t = KdTree::build(&[GeoPoint::new(48.0, 2.0)]).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.count_within(GeoPoint::new(48.0, 2.0), 0.0), 1);
        assert_eq!(t.count_within(GeoPoint::new(49.0, 2.0), 0.5), 0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let t = KdTree::build(&[GeoPoint::new(0.0, 0.5), GeoPoint::new(0.0, -0.5)]).unwrap();
        assert_eq!(t.count_within(GeoPoint::new(0.0, 0.0), 0.5), 2);
        assert_eq!(t.count_within(GeoPoint::new(0.0, 0.0), 0.499_999), 0);
    }

    #[test]
    fn negative_and_nan_radius_match_nothing() {
        let t = KdTree::build(&[GeoPoint::new(0.0, 0.0)]).unwrap();
        assert_eq!(t.count_within(GeoPoint::new(0.0, 0.0), -1.0), 0);
        assert_eq!(t.count_within(GeoPoint::new(0.0, 0.0), f64::NAN), 0);
    }

    #[test]
    fn duplicates_all_counted() {
        let p = GeoPoint::new(43.3, 5.4);
        let t = KdTree::build(&[p, p, p, p]).unwrap();
        assert_eq!(t.count_within(p, 0.0), 4);
    }

    #[test]
    fn visits_report_original_ids() {
        let pts = super::helpers::grid();
        let t = KdTree::build(&pts).unwrap();
        let mut ids: Vec<TrailId> = Vec::new();
        t.for_each_within(GeoPoint::new(45.2, 5.2), 0.1001, &mut |id, p| {
            assert_eq!(pts[id.index()], p);
            ids.push(id);
        });
        ids.sort();
        // Center plus its four axis neighbours.
        assert_eq!(ids.len(), 5);
        assert!(ids.contains(&TrailId(12)));
    }

    #[test]
    fn grid_matches_brute_force() {
        let pts = super::helpers::grid();
        let t = KdTree::build(&pts).unwrap();
        for &r in &[0.0, 0.05, 0.1, 0.15, 0.2, 0.3, 1.0] {
            for c in &pts {
                assert_eq!(
                    t.count_within(*c, r),
                    super::helpers::brute_force(&pts, *c, r),
                    "center {c} radius {r}"
                );
            }
        }
    }
}

// ── R-tree ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rtree {
    use ft_core::GeoPoint;

    use crate::{RTreeIndex, SpatialIndex};

    #[test]
    fn empty_tree_counts_zero() {
        let t = RTreeIndex::build(&[]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.count_within(GeoPoint::new(48.0, 2.0), 10.0), 0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let t = RTreeIndex::build(&[GeoPoint::new(0.0, 0.5)]).unwrap();
        assert_eq!(t.count_within(GeoPoint::new(0.0, 0.0), 0.5), 1);
    }

    #[test]
    fn grid_matches_brute_force() {
        let pts = super::helpers::grid();
        let t = RTreeIndex::build(&pts).unwrap();
        for &r in &[0.0, 0.1, 0.25] {
            for c in &pts {
                assert_eq!(t.count_within(*c, r), super::helpers::brute_force(&pts, *c, r));
            }
        }
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metric {
    use ft_core::{GeoPoint, MetricKind};

    use crate::{DistanceMetric, Haversine, KdTree, PlanarDegrees, metric_for};

    fn two_trails() -> KdTree {
        KdTree::build(&[GeoPoint::new(48.000, 2.000), GeoPoint::new(48.050, 2.000)]).unwrap()
    }

    #[test]
    fn planar_ten_km_finds_both_trails() {
        let t = two_trails();
        assert_eq!(PlanarDegrees.count(&t, GeoPoint::new(48.0, 2.0), 10.0), 2);
    }

    #[test]
    fn planar_five_km_finds_one() {
        // 0.05° ≈ 5.55 km > 5 km
        let t = two_trails();
        assert_eq!(PlanarDegrees.count(&t, GeoPoint::new(48.0, 2.0), 5.0), 1);
    }

    #[test]
    fn planar_reaches_less_far_east_west_than_haversine() {
        // 0.085° of longitude at 60°N is ~4.7 km on the ground, but ~9.4 km
        // under the 111 km/degree rule.
        let t = KdTree::build(&[GeoPoint::new(60.0, 10.085)]).unwrap();
        let c = GeoPoint::new(60.0, 10.0);
        assert_eq!(PlanarDegrees.count(&t, c, 9.0), 0);
        assert_eq!(Haversine.count(&t, c, 9.0), 1);
    }

    #[test]
    fn haversine_matches_exact_filter() {
        let pts = super::helpers::grid();
        let t = KdTree::build(&pts).unwrap();
        for c in &pts {
            for &r in &[1.0, 8.0, 12.0, 25.0] {
                let expected = pts.iter().filter(|p| c.haversine_km(**p) <= r).count();
                assert_eq!(Haversine.count(&t, *c, r), expected, "center {c} radius {r}");
            }
        }
    }

    #[test]
    fn haversine_near_pole_searches_everything() {
        let pts = [GeoPoint::new(89.95, 0.0), GeoPoint::new(89.95, 180.0)];
        let t = KdTree::build(&pts).unwrap();
        // The two points are ~11 km apart across the pole.
        assert_eq!(Haversine.count(&t, GeoPoint::new(89.95, 0.0), 12.0), 2);
    }

    #[test]
    fn metric_for_names() {
        assert_eq!(metric_for(MetricKind::Planar).name(), "planar");
        assert_eq!(metric_for(MetricKind::Haversine).name(), "haversine");
    }
}

// ── Counter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod counter {
    use ft_core::{FestivalRecord, GeoPoint, IndexKind};

    use crate::{KdTree, PlanarDegrees, ProximityCounter, build_index};

    fn festival(name: &str, lat: f64, lon: f64) -> FestivalRecord {
        FestivalRecord::new(name, "C", "R", GeoPoint::new(lat, lon))
    }

    #[test]
    fn empty_trail_set_counts_zero() {
        let t = KdTree::build(&[]).unwrap();
        let c = ProximityCounter::new(&t, &PlanarDegrees, 10.0);
        let out = c.enrich(vec![festival("solo", 48.0, 2.0)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].trails_nearby(), 0);
    }

    #[test]
    fn enrich_preserves_order() {
        let t = KdTree::build(&[GeoPoint::new(48.0, 2.0)]).unwrap();
        let c = ProximityCounter::new(&t, &PlanarDegrees, 10.0);
        let out = c.enrich(vec![
            festival("far", 10.0, 10.0),
            festival("near", 48.01, 2.0),
            festival("far2", -10.0, 10.0),
        ]);
        let names: Vec<_> = out.iter().map(|e| e.festival.name.as_str()).collect();
        assert_eq!(names, ["far", "near", "far2"]);
        let counts: Vec<_> = out.iter().map(|e| e.trails_nearby()).collect();
        assert_eq!(counts, [0, 1, 0]);
    }

    #[test]
    fn both_backends_agree_through_counter() {
        let pts = super::helpers::grid();
        let kd = build_index(IndexKind::KdTree, &pts).unwrap();
        let rt = build_index(IndexKind::RTree, &pts).unwrap();
        let a = ProximityCounter::new(kd.as_ref(), &PlanarDegrees, 15.0);
        let b = ProximityCounter::new(rt.as_ref(), &PlanarDegrees, 15.0);
        for p in &pts {
            assert_eq!(a.count(*p), b.count(*p));
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use ft_core::GeoPoint;
    use proptest::prelude::*;

    use crate::{KdTree, PlanarDegrees, ProximityCounter, RTreeIndex, SpatialIndex};

    fn point() -> impl Strategy<Value = GeoPoint> {
        (42.0f64..51.0, -5.0f64..8.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    proptest! {
        #[test]
        fn kdtree_equals_brute_force(
            pts in prop::collection::vec(point(), 0..200),
            center in point(),
            radius in 0.0f64..2.0,
        ) {
            let t = KdTree::build(&pts).unwrap();
            prop_assert_eq!(
                t.count_within(center, radius),
                super::helpers::brute_force(&pts, center, radius)
            );
        }

        #[test]
        fn rtree_equals_kdtree(
            pts in prop::collection::vec(point(), 0..200),
            center in point(),
            radius in 0.0f64..2.0,
        ) {
            let kd = KdTree::build(&pts).unwrap();
            let rt = RTreeIndex::build(&pts).unwrap();
            prop_assert_eq!(kd.count_within(center, radius), rt.count_within(center, radius));
        }

        #[test]
        fn count_is_monotonic_in_radius(
            pts in prop::collection::vec(point(), 0..150),
            center in point(),
            r1 in 0.0f64..100.0,
            extra in 0.0f64..100.0,
        ) {
            let t = KdTree::build(&pts).unwrap();
            let small = ProximityCounter::new(&t, &PlanarDegrees, r1).count(center);
            let large = ProximityCounter::new(&t, &PlanarDegrees, r1 + extra).count(center);
            prop_assert!(small <= large);
        }
    }
}
