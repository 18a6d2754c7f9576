//! CSV readers for the cleaned festival and trail relations.
//!
//! # CSV format
//!
//! Comma-separated with a header row.  Header names are matched after
//! stripping a leading UTF-8 BOM and surrounding whitespace; column order is
//! free and unknown columns are allowed.
//!
//! ```csv
//! Nom_du_festival,Commune_principale_de_deroulement,Region_principale_de_deroulement,Latitude,Longitude
//! Jazz A Vienne,Vienne,Auvergne-Rhone-Alpes,45.5242,4.8781
//! ```
//!
//! ```csv
//! Nom_du_POI,Latitude,Longitude,commune
//! Boucle Des Etangs,48.01,2.02,Fontainebleau
//! ```
//!
//! An empty `Latitude`/`Longitude` cell reads as NaN, which the coordinate
//! validator later drops.  Any other non-numeric value is an error.
//!
//! All required columns are checked before the first row is read, so a
//! missing column fails without producing records.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use ft_core::{FestivalRecord, GeoPoint, TrailRecord};

use crate::{InputError, InputResult};

pub const LATITUDE:  &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";

/// Festival columns that must be present.
pub const FESTIVAL_COLUMNS: [&str; 5] = [
    "Nom_du_festival",
    "Commune_principale_de_deroulement",
    "Region_principale_de_deroulement",
    LATITUDE,
    LONGITUDE,
];

/// Trail columns that must be present.
pub const TRAIL_COLUMNS: [&str; 2] = [LATITUDE, LONGITUDE];

/// Which input relation an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    Festivals,
    Trails,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Festivals => f.write_str("festival"),
            Relation::Trails    => f.write_str("trail"),
        }
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FestivalRow {
    #[serde(rename = "Nom_du_festival")]
    name:      String,
    #[serde(rename = "Commune_principale_de_deroulement")]
    commune:   String,
    #[serde(rename = "Region_principale_de_deroulement")]
    region:    String,
    #[serde(rename = "Latitude")]
    latitude:  Option<String>,
    #[serde(rename = "Longitude")]
    longitude: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every festival row from a CSV file, in file order.
pub fn load_festivals_csv(path: &Path) -> InputResult<Vec<FestivalRecord>> {
    let file = File::open(path)
        .map_err(|source| InputError::Io { relation: Relation::Festivals, source })?;
    load_festivals_reader(file)
}

/// Like [`load_festivals_csv`] but accepts any `Read` source.
pub fn load_festivals_reader<R: Read>(reader: R) -> InputResult<Vec<FestivalRecord>> {
    let relation = Relation::Festivals;
    let mut rdr = reader_builder().from_reader(reader);
    let headers = clean_headers(&mut rdr, relation)?;
    require_columns(&headers, &FESTIVAL_COLUMNS, relation)?;

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| InputError::Csv { relation, source })?;
        let line = record.position().map_or(0, |p| p.line());
        let row: FestivalRow = record
            .deserialize(Some(&headers))
            .map_err(|source| InputError::Csv { relation, source })?;

        let lat = parse_coordinate(row.latitude.as_deref(), line, LATITUDE, relation)?;
        let lon = parse_coordinate(row.longitude.as_deref(), line, LONGITUDE, relation)?;
        out.push(FestivalRecord::new(row.name, row.commune, row.region, GeoPoint::new(lat, lon)));
    }

    debug!(rows = out.len(), "read festival rows");
    Ok(out)
}

/// Load every trail row from a CSV file, in file order.
///
/// Columns other than `Latitude`/`Longitude` are kept on each record as
/// passthrough attributes.
pub fn load_trails_csv(path: &Path) -> InputResult<Vec<TrailRecord>> {
    let file = File::open(path)
        .map_err(|source| InputError::Io { relation: Relation::Trails, source })?;
    load_trails_reader(file)
}

/// Like [`load_trails_csv`] but accepts any `Read` source.
pub fn load_trails_reader<R: Read>(reader: R) -> InputResult<Vec<TrailRecord>> {
    let relation = Relation::Trails;
    let mut rdr = reader_builder().from_reader(reader);
    let headers = clean_headers(&mut rdr, relation)?;
    let [lat_idx, lon_idx] = require_columns(&headers, &TRAIL_COLUMNS, relation)?;

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| InputError::Csv { relation, source })?;
        let line = record.position().map_or(0, |p| p.line());

        let lat = parse_coordinate(record.get(lat_idx), line, LATITUDE, relation)?;
        let lon = parse_coordinate(record.get(lon_idx), line, LONGITUDE, relation)?;

        let attributes = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .filter(|(i, _)| *i != lat_idx && *i != lon_idx)
            .map(|(_, (h, v))| (h.to_owned(), v.to_owned()))
            .collect();

        out.push(TrailRecord { point: GeoPoint::new(lat, lon), attributes });
    }

    debug!(rows = out.len(), "read trail rows");
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    b
}

/// Strip a BOM and whitespace from every header and install the result on
/// the reader.
fn clean_headers<R: Read>(
    rdr: &mut csv::Reader<R>,
    relation: Relation,
) -> InputResult<StringRecord> {
    let raw = rdr
        .headers()
        .map_err(|source| InputError::Csv { relation, source })?;
    let cleaned: StringRecord = raw
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();
    rdr.set_headers(cleaned.clone());
    Ok(cleaned)
}

/// Position of every `required` column, or the first one missing.
fn require_columns<const N: usize>(
    headers:  &StringRecord,
    required: &[&'static str; N],
    relation: Relation,
) -> InputResult<[usize; N]> {
    let mut idx = [0usize; N];
    for (slot, &column) in idx.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or(InputError::MissingColumn { relation, column })?;
    }
    Ok(idx)
}

fn parse_coordinate(
    field:    Option<&str>,
    line:     u64,
    column:   &'static str,
    relation: Relation,
) -> InputResult<f64> {
    let s = field.unwrap_or("").trim();
    if s.is_empty() {
        return Ok(f64::NAN);
    }
    s.parse::<f64>().map_err(|_| InputError::InvalidCoordinate {
        relation,
        line,
        column,
        value: s.to_owned(),
    })
}
