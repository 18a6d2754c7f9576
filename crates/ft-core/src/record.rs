//! Record types flowing through the pipeline.

use crate::GeoPoint;

/// Anything that carries a coordinate the validator can check.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    #[inline]
    fn location(&self) -> GeoPoint {
        *self
    }
}

/// One trail point of interest.
///
/// Only `point` is read by the pipeline.  Every other input column is kept in
/// `attributes` as `(column, value)` pairs, in input column order.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailRecord {
    pub point:      GeoPoint,
    pub attributes: Vec<(String, String)>,
}

impl TrailRecord {
    pub fn new(point: GeoPoint) -> Self {
        Self { point, attributes: Vec::new() }
    }
}

impl Located for TrailRecord {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.point
    }
}

/// One festival with the attributes the rankings group on.
#[derive(Clone, Debug, PartialEq)]
pub struct FestivalRecord {
    pub name:    String,
    pub commune: String,
    pub region:  String,
    pub point:   GeoPoint,
}

impl FestivalRecord {
    pub fn new(
        name:    impl Into<String>,
        commune: impl Into<String>,
        region:  impl Into<String>,
        point:   GeoPoint,
    ) -> Self {
        Self {
            name:    name.into(),
            commune: commune.into(),
            region:  region.into(),
            point,
        }
    }
}

impl Located for FestivalRecord {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.point
    }
}

/// A festival paired with the number of trails found within the radius.
///
/// The count is fixed at construction; there is no setter.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedFestival {
    pub festival:  FestivalRecord,
    trails_nearby: u32,
}

impl EnrichedFestival {
    pub fn new(festival: FestivalRecord, trails_nearby: u32) -> Self {
        Self { festival, trails_nearby }
    }

    #[inline]
    pub fn trails_nearby(&self) -> u32 {
        self.trails_nearby
    }
}

impl Located for EnrichedFestival {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.festival.point
    }
}
