use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ft_core::{IndexKind, MetricKind};

/// Count trails near each festival and write the four ranking tables.
#[derive(Parser, Debug)]
#[command(name = "festival-trails")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Cleaned festival CSV
    #[arg(long)]
    pub festivals: Option<PathBuf>,

    /// Cleaned trail CSV
    #[arg(long)]
    pub trails: Option<PathBuf>,

    /// Directory receiving the four ranking CSVs [default: .]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// TOML file with [proximity] and [paths] tables; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search radius in kilometres [default: 10]
    #[arg(long)]
    pub radius_km: Option<f64>,

    /// Rows in the festival ranking [default: 20]
    #[arg(long)]
    pub top_festivals: Option<usize>,

    /// Rows in the commune ranking [default: 10]
    #[arg(long)]
    pub top_communes: Option<usize>,

    /// Distance rule [default: planar]
    #[arg(long, value_enum)]
    pub metric: Option<MetricArg>,

    /// Spatial index backend [default: kdtree]
    #[arg(long, value_enum)]
    pub index: Option<IndexArg>,

    /// Log stage details (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Planar degrees against radius_km / 111
    Planar,
    /// Great-circle kilometres
    Haversine,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IndexArg {
    Kdtree,
    Rtree,
}

impl From<MetricArg> for MetricKind {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Planar    => MetricKind::Planar,
            MetricArg::Haversine => MetricKind::Haversine,
        }
    }
}

impl From<IndexArg> for IndexKind {
    fn from(i: IndexArg) -> Self {
        match i {
            IndexArg::Kdtree => IndexKind::KdTree,
            IndexArg::Rtree  => IndexKind::RTree,
        }
    }
}
