//! Stage functions and the [`Pipeline`] that chains them.
//!
//! ```text
//! trails ──validate──► index ─┐
//!                             ├─► count ──► rank ──► export
//! festivals ──validate────────┘
//! ```
//!
//! Every stage takes its inputs by value or shared reference and returns new
//! data; nothing is shared between stages except through return values.

use std::path::Path;

use tracing::{info, warn};

use ft_core::{
    EnrichedFestival, FestivalRecord, GeoPoint, ProximityConfig, TrailRecord, Validated,
    validate_coordinates,
};
use ft_output::{CsvRankingWriter, RankingWriter};
use ft_rank::{Rankings, rank_all};
use ft_spatial::{ProximityCounter, SpatialIndex, build_index, metric_for};

use crate::{PipelineBuilder, PipelineResult, RunReport};

// ── Stages ────────────────────────────────────────────────────────────────────

/// Drop trails with out-of-range coordinates.
pub fn validate_trails(trails: Vec<TrailRecord>) -> Validated<TrailRecord> {
    let v = validate_coordinates(trails);
    if v.dropped > 0 {
        warn!(dropped = v.dropped, kept = v.kept.len(), "dropped trails with invalid coordinates");
    }
    v
}

/// Drop festivals with out-of-range coordinates.
pub fn validate_festivals(festivals: Vec<FestivalRecord>) -> Validated<FestivalRecord> {
    let v = validate_coordinates(festivals);
    if v.dropped > 0 {
        warn!(dropped = v.dropped, kept = v.kept.len(), "dropped festivals with invalid coordinates");
    }
    v
}

/// Build the configured index over the trail coordinates.
pub fn index_trails(
    trails: &[TrailRecord],
    config: &ProximityConfig,
) -> PipelineResult<Box<dyn SpatialIndex>> {
    let points: Vec<GeoPoint> = trails.iter().map(|t| t.point).collect();
    if points.is_empty() {
        warn!("trail set is empty; every festival will count 0 trails");
    }
    let index = build_index(config.index, &points)?;
    info!(trails = index.len(), backend = %config.index, "built spatial index");
    Ok(index)
}

/// Count trails around every festival, preserving festival order.
pub fn count_nearby(
    index:     &dyn SpatialIndex,
    festivals: Vec<FestivalRecord>,
    config:    &ProximityConfig,
) -> Vec<EnrichedFestival> {
    let metric = metric_for(config.metric);
    let counter = ProximityCounter::new(index, metric.as_ref(), config.radius_km);
    let enriched = counter.enrich(festivals);
    info!(
        festivals = enriched.len(),
        radius_km = config.radius_km,
        metric = metric.name(),
        "counted nearby trails"
    );
    enriched
}

/// Derive the four rankings.
pub fn rank(enriched: &[EnrichedFestival], config: &ProximityConfig) -> Rankings {
    rank_all(enriched, config.top_festivals, config.top_communes)
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Kept festivals with their counts, in input order.
    pub enriched: Vec<EnrichedFestival>,
    pub rankings: Rankings,
    pub report:   RunReport,
}

/// A configured, not yet executed run.  Build with [`PipelineBuilder`].
pub struct Pipeline {
    pub(crate) config:    ProximityConfig,
    pub(crate) festivals: Vec<FestivalRecord>,
    pub(crate) trails:    Vec<TrailRecord>,
}

impl Pipeline {
    /// Run every stage up to, not including, export.
    pub fn run(self) -> PipelineResult<PipelineOutput> {
        let Pipeline { config, festivals, trails } = self;

        let trails = validate_trails(trails);
        let festivals = validate_festivals(festivals);
        let festivals_read = festivals.total();

        let index = index_trails(&trails.kept, &config)?;
        let enriched = count_nearby(index.as_ref(), festivals.kept, &config);
        let rankings = rank(&enriched, &config);

        let report = RunReport {
            festivals_read,
            festivals_dropped:   festivals.dropped,
            trails_read:         trails.total(),
            trails_dropped:      trails.dropped,
            radius_km:           config.radius_km,
            metric:              config.metric,
            index:               config.index,
            total_trails_nearby: enriched.iter().map(|e| u64::from(e.trails_nearby())).sum(),
        };

        Ok(PipelineOutput { enriched, rankings, report })
    }

    /// Run every stage and hand the rankings to `writer`.
    pub fn run_and_write<W: RankingWriter>(self, writer: &mut W) -> PipelineResult<PipelineOutput> {
        let output = self.run()?;
        writer.write_rankings(&output.rankings)?;
        Ok(output)
    }
}

/// Read both CSV inputs, run, and write the four CSV relations to `out_dir`.
///
/// Both inputs are read and checked before any computation starts, so a
/// missing column leaves `out_dir` untouched.
pub fn run_files(
    festivals_path: &Path,
    trails_path:    &Path,
    out_dir:        &Path,
    config:         ProximityConfig,
) -> PipelineResult<PipelineOutput> {
    let festivals = ft_input::load_festivals_csv(festivals_path)?;
    let trails = ft_input::load_trails_csv(trails_path)?;
    info!(festivals = festivals.len(), trails = trails.len(), "read inputs");

    let pipeline = PipelineBuilder::new(config)
        .festivals(festivals)
        .trails(trails)
        .build()?;

    let mut writer = CsvRankingWriter::new(out_dir)?;
    let output = pipeline.run_and_write(&mut writer)?;
    info!(dir = %out_dir.display(), files = writer.written().len(), "wrote rankings");
    Ok(output)
}
