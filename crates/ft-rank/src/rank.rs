//! The four rankings derived from enriched festival records.
//!
//! Each function is independent and reads the records only.  Ties always go
//! to the record, or group, that appears first in the input.

use ft_core::EnrichedFestival;

use crate::group::{group_sum, sort_desc_stable};
use crate::row::{
    CommuneTrailsRow, FestivalRankRow, Rankings, RegionFestivalsRow, RegionTrailsRow,
};

/// The `n` festivals with the most trails nearby, highest first.
///
/// Length is `min(n, records.len())`.
pub fn top_festivals(records: &[EnrichedFestival], n: usize) -> Vec<FestivalRankRow> {
    let mut order: Vec<&EnrichedFestival> = records.iter().collect();
    sort_desc_stable(&mut order, |e| u64::from(e.trails_nearby()));

    order
        .into_iter()
        .take(n)
        .map(|e| FestivalRankRow {
            name:          e.festival.name.clone(),
            commune:       e.festival.commune.clone(),
            trails_nearby: e.trails_nearby(),
        })
        .collect()
}

/// The `n` communes with the largest summed trail count, highest first.
pub fn top_communes_by_trails(records: &[EnrichedFestival], n: usize) -> Vec<CommuneTrailsRow> {
    let mut groups = group_sum(
        records,
        |e| e.festival.commune.as_str(),
        |e| u64::from(e.trails_nearby()),
    );
    sort_desc_stable(&mut groups, |g| g.1);

    groups
        .into_iter()
        .take(n)
        .map(|(commune, sum)| CommuneTrailsRow {
            commune:       commune.to_owned(),
            trails_nearby: sum,
        })
        .collect()
}

/// Every region with its number of festival records, most first.
pub fn regions_by_festival_count(records: &[EnrichedFestival]) -> Vec<RegionFestivalsRow> {
    let mut groups = group_sum(records, |e| e.festival.region.as_str(), |_| 1);
    sort_desc_stable(&mut groups, |g| g.1);

    groups
        .into_iter()
        .map(|(region, count)| RegionFestivalsRow {
            region:              region.to_owned(),
            number_of_festivals: count,
        })
        .collect()
}

/// Every region with its summed trail count, highest first.
pub fn regions_by_trail_sum(records: &[EnrichedFestival]) -> Vec<RegionTrailsRow> {
    let mut groups = group_sum(
        records,
        |e| e.festival.region.as_str(),
        |e| u64::from(e.trails_nearby()),
    );
    sort_desc_stable(&mut groups, |g| g.1);

    groups
        .into_iter()
        .map(|(region, sum)| RegionTrailsRow {
            region:           region.to_owned(),
            number_of_trails: sum,
        })
        .collect()
}

/// Compute all four rankings.
pub fn rank_all(records: &[EnrichedFestival], top_n_festivals: usize, top_n_communes: usize) -> Rankings {
    Rankings {
        top_festivals:    top_festivals(records, top_n_festivals),
        commune_trails:   top_communes_by_trails(records, top_n_communes),
        region_festivals: regions_by_festival_count(records),
        region_trails:    regions_by_trail_sum(records),
    }
}
