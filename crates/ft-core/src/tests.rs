//! Unit tests for ft-core primitives.

#[cfg(test)]
mod ids {
    use crate::TrailId;

    #[test]
    fn index_roundtrip() {
        let id = TrailId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrailId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(TrailId(7).to_string(), "TrailId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, km_to_planar_degrees};

    #[test]
    fn validity_bounds_are_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.000_1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn nan_is_invalid() {
        assert!(!GeoPoint::new(f64::NAN, 2.0).is_valid());
        assert!(!GeoPoint::new(48.0, f64::NAN).is_valid());
    }

    #[test]
    fn ten_km_is_about_0_09_degrees() {
        let r = km_to_planar_degrees(10.0);
        assert!((r - 0.090_090).abs() < 1e-6, "got {r}");
    }

    #[test]
    fn planar_distance_ignores_latitude() {
        // Same degree offsets give the same planar distance anywhere.
        let eq = GeoPoint::new(0.0, 0.0).planar_distance_2(GeoPoint::new(0.0, 0.05));
        let north = GeoPoint::new(60.0, 0.0).planar_distance_2(GeoPoint::new(60.0, 0.05));
        assert!((eq - north).abs() < 1e-15);
    }

    #[test]
    fn one_degree_latitude_haversine() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.haversine_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn zero_haversine() {
        let p = GeoPoint::new(48.8566, 2.3522);
        assert!(p.haversine_km(p) < 1e-9);
    }
}

#[cfg(test)]
mod validate {
    use crate::{FestivalRecord, GeoPoint, validate_coordinates};

    #[test]
    fn keeps_valid_in_order() {
        let pts = vec![
            GeoPoint::new(48.0, 2.0),
            GeoPoint::new(91.0, 2.0),
            GeoPoint::new(-12.0, 45.0),
            GeoPoint::new(10.0, 200.0),
            GeoPoint::new(f64::NAN, 0.0),
            GeoPoint::new(43.6, 1.44),
        ];
        let v = validate_coordinates(pts);
        assert_eq!(
            v.kept,
            vec![
                GeoPoint::new(48.0, 2.0),
                GeoPoint::new(-12.0, 45.0),
                GeoPoint::new(43.6, 1.44),
            ]
        );
        assert_eq!(v.dropped, 3);
        assert_eq!(v.total(), 6);
    }

    #[test]
    fn duplicates_are_kept() {
        let p = GeoPoint::new(1.0, 1.0);
        let v = validate_coordinates(vec![p, p, p]);
        assert_eq!(v.kept.len(), 3);
        assert_eq!(v.dropped, 0);
    }

    #[test]
    fn works_on_records() {
        let records = vec![
            FestivalRecord::new("A", "Paris", "IDF", GeoPoint::new(48.85, 2.35)),
            FestivalRecord::new("B", "Nowhere", "X", GeoPoint::new(120.0, 2.35)),
        ];
        let v = validate_coordinates(records);
        assert_eq!(v.kept.len(), 1);
        assert_eq!(v.kept[0].name, "A");
    }

    #[test]
    fn empty_input() {
        let v = validate_coordinates(Vec::<GeoPoint>::new());
        assert!(v.kept.is_empty());
        assert_eq!(v.dropped, 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, IndexKind, MetricKind, ProximityConfig};

    #[test]
    fn defaults() {
        let c = ProximityConfig::default();
        assert_eq!(c.radius_km, 10.0);
        assert_eq!(c.top_festivals, 20);
        assert_eq!(c.top_communes, 10);
        assert_eq!(c.metric, MetricKind::Planar);
        assert_eq!(c.index, IndexKind::KdTree);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_negative_radius() {
        let c = ProximityConfig { radius_km: -1.0, ..Default::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_nan_radius() {
        let c = ProximityConfig { radius_km: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_top_n() {
        let c = ProximityConfig { top_festivals: 0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = ProximityConfig { top_communes: 0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_radius_is_allowed() {
        let c = ProximityConfig { radius_km: 0.0, ..Default::default() };
        assert!(c.validate().is_ok());
        assert_eq!(c.radius_degrees(), 0.0);
    }
}

#[cfg(test)]
mod records {
    use crate::{EnrichedFestival, FestivalRecord, GeoPoint, TrailRecord};

    #[test]
    fn new_trail_has_no_attributes() {
        let t = TrailRecord::new(GeoPoint::new(45.0, 5.0));
        assert_eq!(t.point, GeoPoint::new(45.0, 5.0));
        assert!(t.attributes.is_empty());
    }

    #[test]
    fn enriched_count_is_fixed() {
        let f = FestivalRecord::new("Jazz", "Vienne", "ARA", GeoPoint::new(45.52, 4.87));
        let e = EnrichedFestival::new(f, 7);
        assert_eq!(e.trails_nearby(), 7);
        assert_eq!(e.festival.commune, "Vienne");
    }
}
