//! The `RankingWriter` trait implemented by output backends.

use ft_rank::{CommuneTrailsRow, FestivalRankRow, Rankings, RegionFestivalsRow, RegionTrailsRow};

use crate::OutputResult;

/// One method per output relation.
///
/// Each call writes its relation completely; a failed call leaves no trace
/// of that relation.
pub trait RankingWriter {
    fn write_top_festivals(&mut self, rows: &[FestivalRankRow]) -> OutputResult<()>;

    fn write_commune_trails(&mut self, rows: &[CommuneTrailsRow]) -> OutputResult<()>;

    fn write_region_festivals(&mut self, rows: &[RegionFestivalsRow]) -> OutputResult<()>;

    fn write_region_trails(&mut self, rows: &[RegionTrailsRow]) -> OutputResult<()>;

    /// Flush anything still buffered.
    ///
    /// Idempotent; may be called more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write all four relations, stopping at the first error.
    fn write_rankings(&mut self, rankings: &Rankings) -> OutputResult<()> {
        self.write_top_festivals(&rankings.top_festivals)?;
        self.write_commune_trails(&rankings.commune_trails)?;
        self.write_region_festivals(&rankings.region_festivals)?;
        self.write_region_trails(&rankings.region_trails)?;
        self.finish()
    }
}
