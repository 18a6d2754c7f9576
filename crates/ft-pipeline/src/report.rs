//! Run summary.

use std::fmt;

use ft_core::{IndexKind, MetricKind};

/// Counts describing one pipeline run.
///
/// `*_dropped` are records removed by the coordinate validator; they are
/// not errors and do not affect the rankings beyond their absence.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub festivals_read:    usize,
    pub festivals_dropped: usize,
    pub trails_read:       usize,
    pub trails_dropped:    usize,
    pub radius_km:         f64,
    pub metric:            MetricKind,
    pub index:             IndexKind,
    /// Sum of `trails_nearby` over all kept festivals.
    pub total_trails_nearby: u64,
}

impl RunReport {
    pub fn festivals_kept(&self) -> usize {
        self.festivals_read - self.festivals_dropped
    }

    pub fn trails_kept(&self) -> usize {
        self.trails_read - self.trails_dropped
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "festivals: {} read, {} dropped (invalid coordinates)",
            self.festivals_read, self.festivals_dropped
        )?;
        writeln!(
            f,
            "trails:    {} read, {} dropped (invalid coordinates)",
            self.trails_read, self.trails_dropped
        )?;
        write!(
            f,
            "radius {} km ({} metric, {} index): {} festival/trail pairs",
            self.radius_km, self.metric, self.index, self.total_trails_nearby
        )
    }
}
