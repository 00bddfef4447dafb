//! Catalog builder: raw star table to normalized, distance-sorted catalog.
//!
//! The transform itself ([`build_catalog`]) is pure. File I/O lives in
//! [`read_raw_catalog`], [`write_catalog`] and [`run`], which fail the whole
//! build on any read or parse error; no partial output is ever written.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::config::BuilderSettings;
use crate::models::{format_dec_dms, format_ra_hms, CatalogRow, RawStarRow, StarComponent, StarRecord};

/// Light-years per parsec, as used throughout the catalog.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26;

/// Spectral type written when the source row has none.
pub const UNKNOWN_SPECTRAL_TYPE: &str = "Unknown";

/// Placeholder for a coordinate the source row does not provide.
pub const MISSING_COORDINATE: &str = "N/A";

/// Pick the display name for a row.
///
/// Priority: proper name, Bayer/Flamsteed, Gliese (`GJ`), Hipparcos (`HIP`),
/// Henry Draper (`HD`), then `Star {id}`.
pub fn resolve_display_name(row: &CatalogRow) -> String {
    if let Some(proper) = &row.proper {
        return proper.clone();
    }
    if let Some(bayer) = &row.bayer {
        return bayer.clone();
    }
    if let Some(gl) = &row.gliese {
        return format!("GJ {}", gl);
    }
    if let Some(hip) = &row.hip {
        return format!("HIP {}", hip);
    }
    if let Some(hd) = &row.hd {
        return format!("HD {}", hd);
    }
    format!("Star {}", row.id.as_deref().unwrap_or_default())
}

/// Build the normalized catalog from canonical rows.
///
/// Rows without a positive distance are dropped silently, as are rows beyond
/// `max_distance_ly`. The result is sorted by `distance_ly`, ties by name.
pub fn build_catalog(rows: &[CatalogRow], max_distance_ly: f64) -> Vec<StarRecord> {
    let max_distance_pc = max_distance_ly / LIGHT_YEARS_PER_PARSEC;

    let mut records: Vec<StarRecord> = rows
        .iter()
        .filter(|row| {
            row.distance_pc
                .is_some_and(|pc| pc > 0.0 && pc <= max_distance_pc)
        })
        .filter_map(to_record)
        .collect();

    records.sort_by(|a, b| {
        a.distance_ly
            .total_cmp(&b.distance_ly)
            .then_with(|| a.name.cmp(&b.name))
    });
    records
}

fn to_record(row: &CatalogRow) -> Option<StarRecord> {
    let distance_pc = row.distance_pc?;
    let name = resolve_display_name(row);
    let spectral_type = row
        .spectral_type
        .clone()
        .unwrap_or_else(|| UNKNOWN_SPECTRAL_TYPE.to_string());

    Some(StarRecord {
        name: name.clone(),
        distance_ly: round2(distance_pc * LIGHT_YEARS_PER_PARSEC),
        distance_pc: round2(distance_pc),
        ra: row
            .ra_hours
            .map(format_ra_hms)
            .unwrap_or_else(|| MISSING_COORDINATE.to_string()),
        dec: row
            .dec_degrees
            .map(format_dec_dms)
            .unwrap_or_else(|| MISSING_COORDINATE.to_string()),
        components: vec![StarComponent::new(name, spectral_type)],
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Read and normalize a raw CSV catalog from disk.
pub fn read_raw_catalog(path: &Path) -> Result<Vec<CatalogRow>> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open raw catalog {}", path.display()))?;
    read_raw_catalog_from_reader(file)
        .with_context(|| format!("Failed to parse raw catalog {}", path.display()))
}

/// Read and normalize a raw CSV catalog from any reader.
pub fn read_raw_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<CatalogRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    rdr.deserialize::<RawStarRow>()
        .enumerate()
        .map(|(i, row)| {
            row.map(RawStarRow::normalize)
                .with_context(|| format!("Malformed CSV record at row {}", i + 1))
        })
        .collect()
}

/// Serialize the catalog as pretty-printed JSON.
pub fn catalog_to_json(records: &[StarRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize catalog")
}

/// Write the catalog to `path`.
///
/// The JSON is fully serialized first and then moved into place, so a failed
/// build leaves no partial file behind.
pub fn write_catalog(path: &Path, records: &[StarRecord]) -> Result<()> {
    let json = catalog_to_json(records)?;
    let staging = path.with_extension("json.partial");
    fs::write(&staging, json)
        .with_context(|| format!("Failed to write {}", staging.display()))?;
    fs::rename(&staging, path)
        .with_context(|| format!("Failed to move catalog into {}", path.display()))?;
    Ok(())
}

/// Result summary printed by the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub count: usize,
    pub max_distance_ly: f64,
    pub nearest_ly: Option<f64>,
    pub farthest_ly: Option<f64>,
}

impl CatalogSummary {
    pub fn from_records(records: &[StarRecord], max_distance_ly: f64) -> Self {
        Self {
            count: records.len(),
            max_distance_ly,
            nearest_ly: records.first().map(|r| r.distance_ly),
            farthest_ly: records.last().map(|r| r.distance_ly),
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} stars within {} light-years",
            self.count, self.max_distance_ly
        )?;
        if let (Some(nearest), Some(farthest)) = (self.nearest_ly, self.farthest_ly) {
            write!(f, " (distance range: {} - {} LY)", nearest, farthest)?;
        }
        Ok(())
    }
}

/// Run a full build: read, transform, write.
pub fn run(settings: &BuilderSettings) -> Result<CatalogSummary> {
    let rows = read_raw_catalog(&settings.input)?;
    log::debug!("Read {} raw rows from {}", rows.len(), settings.input.display());

    let records = build_catalog(&rows, settings.max_distance_ly);
    write_catalog(&settings.output, &records)?;

    let summary = CatalogSummary::from_records(&records, settings.max_distance_ly);
    log::info!("Wrote {} ({} stars)", settings.output.display(), summary.count);
    Ok(summary)
}

#[cfg(test)]
#[path = "catalog_builder_tests.rs"]
mod catalog_builder_tests;
