//! TOML configuration file and flag merging.
//!
//! ```toml
//! [proximity]
//! radius_km     = 10.0
//! top_festivals = 20
//! top_communes  = 10
//! metric        = "planar"    # or "haversine"
//! index         = "kdtree"    # or "rtree"
//!
//! [paths]
//! festivals = "cleaned_festivals.csv"
//! trails    = "cleaned_trails.csv"
//! out_dir   = "output"
//! ```
//!
//! Every key is optional.  Precedence: flag > file > built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use ft_core::ProximityConfig;

use crate::cli::Cli;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub proximity: ProximityConfig,
    pub paths:     PathsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub festivals: Option<PathBuf>,
    pub trails:    Option<PathBuf>,
    pub out_dir:   Option<PathBuf>,
}

/// Fully resolved inputs for one run.
#[derive(Debug)]
pub struct RunSettings {
    pub festivals: PathBuf,
    pub trails:    PathBuf,
    pub out_dir:   PathBuf,
    pub proximity: ProximityConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Merge defaults, the optional config file, and command-line flags.
pub fn resolve(cli: &Cli) -> Result<RunSettings> {
    let file = match &cli.config {
        Some(p) => FileConfig::load(p)?,
        None => FileConfig::default(),
    };
    merge(cli, file)
}

pub fn merge(cli: &Cli, file: FileConfig) -> Result<RunSettings> {
    let mut proximity = file.proximity;
    if let Some(r) = cli.radius_km {
        proximity.radius_km = r;
    }
    if let Some(n) = cli.top_festivals {
        proximity.top_festivals = n;
    }
    if let Some(n) = cli.top_communes {
        proximity.top_communes = n;
    }
    if let Some(m) = cli.metric {
        proximity.metric = m.into();
    }
    if let Some(i) = cli.index {
        proximity.index = i.into();
    }

    let Some(festivals) = cli.festivals.clone().or(file.paths.festivals) else {
        bail!("no festival input: pass --festivals or set paths.festivals in the config file");
    };
    let Some(trails) = cli.trails.clone().or(file.paths.trails) else {
        bail!("no trail input: pass --trails or set paths.trails in the config file");
    };
    let out_dir = cli
        .out_dir
        .clone()
        .or(file.paths.out_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(RunSettings { festivals, trails, out_dir, proximity })
}
