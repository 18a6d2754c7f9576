//! Plain data row types, one per ranking.

/// One festival in the top-N festival ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalRankRow {
    pub name:          String,
    pub commune:       String,
    pub trails_nearby: u32,
}

/// Summed nearby-trail count for one commune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommuneTrailsRow {
    pub commune:       String,
    pub trails_nearby: u64,
}

/// Number of festival records in one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFestivalsRow {
    pub region:              String,
    pub number_of_festivals: u64,
}

/// Summed nearby-trail count for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTrailsRow {
    pub region:           String,
    pub number_of_trails: u64,
}

/// The four rankings of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rankings {
    pub top_festivals:    Vec<FestivalRankRow>,
    pub commune_trails:   Vec<CommuneTrailsRow>,
    pub region_festivals: Vec<RegionFestivalsRow>,
    pub region_trails:    Vec<RegionTrailsRow>,
}
