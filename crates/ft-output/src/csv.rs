//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `top_20_festivals.csv`
//! - `commune_trails.csv`
//! - `region_festivals.csv`
//! - `region_trails.csv`
//!
//! Each file is written to a hidden temporary file in the same directory and
//! renamed over the target only after the last row is flushed.

use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use ft_rank::{CommuneTrailsRow, FestivalRankRow, RegionFestivalsRow, RegionTrailsRow};

use crate::writer::RankingWriter;
use crate::{OutputError, OutputResult};

pub const TOP_FESTIVALS_FILE:    &str = "top_20_festivals.csv";
pub const COMMUNE_TRAILS_FILE:   &str = "commune_trails.csv";
pub const REGION_FESTIVALS_FILE: &str = "region_festivals.csv";
pub const REGION_TRAILS_FILE:    &str = "region_trails.csv";

pub const TOP_FESTIVALS_HEADER:    [&str; 3] = ["Nom_du_festival", "Commune_principale_de_deroulement", "Trails_nearby"];
pub const COMMUNE_TRAILS_HEADER:   [&str; 2] = ["Commune_principale_de_deroulement", "Trails_nearby"];
pub const REGION_FESTIVALS_HEADER: [&str; 2] = ["Region", "Number_of_Festivals"];
pub const REGION_TRAILS_HEADER:    [&str; 2] = ["Region", "Number_of_Trails"];

/// Writes each ranking to its own CSV file.
pub struct CsvRankingWriter {
    dir:     PathBuf,
    written: Vec<PathBuf>,
}

impl CsvRankingWriter {
    /// Create `dir` (and parents) if needed.  No file is opened until a
    /// relation is written.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), written: Vec::new() })
    }

    /// Files completed so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Write `header` then `rows` to `name` atomically.
    fn write_file<I, R>(&mut self, name: &str, header: &[&str], rows: I) -> OutputResult<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!(".{name}."))
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;

        let mut n = 0usize;
        {
            let mut w = Writer::from_writer(&mut tmp);
            w.write_record(header)?;
            for row in rows {
                w.write_record(row)?;
                n += 1;
            }
            w.flush()?;
        }
        tmp.as_file().sync_all()?;

        let path = self.dir.join(name);
        tmp.persist(&path)
            .map_err(|e| OutputError::Persist { path: path.clone(), source: e.error })?;

        debug!(path = %path.display(), rows = n, "wrote ranking");
        self.written.push(path);
        Ok(())
    }
}

impl RankingWriter for CsvRankingWriter {
    fn write_top_festivals(&mut self, rows: &[FestivalRankRow]) -> OutputResult<()> {
        self.write_file(
            TOP_FESTIVALS_FILE,
            &TOP_FESTIVALS_HEADER,
            rows.iter().map(|r| {
                [r.name.clone(), r.commune.clone(), r.trails_nearby.to_string()]
            }),
        )
    }

    fn write_commune_trails(&mut self, rows: &[CommuneTrailsRow]) -> OutputResult<()> {
        self.write_file(
            COMMUNE_TRAILS_FILE,
            &COMMUNE_TRAILS_HEADER,
            rows.iter().map(|r| [r.commune.clone(), r.trails_nearby.to_string()]),
        )
    }

    fn write_region_festivals(&mut self, rows: &[RegionFestivalsRow]) -> OutputResult<()> {
        self.write_file(
            REGION_FESTIVALS_FILE,
            &REGION_FESTIVALS_HEADER,
            rows.iter().map(|r| [r.region.clone(), r.number_of_festivals.to_string()]),
        )
    }

    fn write_region_trails(&mut self, rows: &[RegionTrailsRow]) -> OutputResult<()> {
        self.write_file(
            REGION_TRAILS_FILE,
            &REGION_TRAILS_HEADER,
            rows.iter().map(|r| [r.region.clone(), r.number_of_trails.to_string()]),
        )
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Every relation is flushed and renamed as it is written.
        Ok(())
    }
}
