//! `ft-rank` — grouped aggregation and ranking of enriched festivals.
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`rank`]  | `top_festivals`, `top_communes_by_trails`, `regions_by_*`, `rank_all` |
//! | [`group`] | insertion-ordered `group_sum`, `sort_desc_stable`             |
//! | [`row`]   | row types and the `Rankings` bundle                           |
//!
//! # Tie-breaks
//!
//! Equal values keep input order: for records, the order of the slice; for
//! groups, the position where the key first occurs.  Results therefore do not
//! depend on hash iteration order.

pub mod group;
pub mod rank;
pub mod row;


pub use rank::{
    rank_all, regions_by_festival_count, regions_by_trail_sum, top_communes_by_trails,
    top_festivals,
};
pub use row::{CommuneTrailsRow, FestivalRankRow, Rankings, RegionFestivalsRow, RegionTrailsRow};
