//! Raw catalog rows and their normalization.
//!
//! Source tables come from different exports of the HYG database and do not
//! agree on column names (`ra` vs `right_ascension`, `spect` vs `star_type`).
//! [`RawStarRow`] accepts every known spelling; [`RawStarRow::normalize`]
//! turns it into the single canonical [`CatalogRow`] used by the builder.

use serde::Deserialize;

/// One row as read from the source CSV.
///
/// Every column is optional and kept as text; numeric interpretation happens
/// in [`RawStarRow::normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStarRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub proper: Option<String>,
    /// Bayer / Flamsteed designation
    #[serde(default)]
    pub bf: Option<String>,
    /// Gliese catalog id
    #[serde(default)]
    pub gl: Option<String>,
    #[serde(default)]
    pub hip: Option<String>,
    #[serde(default)]
    pub hd: Option<String>,
    /// Right ascension in decimal hours
    #[serde(default, alias = "right_ascension")]
    pub ra: Option<String>,
    /// Declination in decimal degrees
    #[serde(default, alias = "declination")]
    pub dec: Option<String>,
    /// Distance in parsecs
    #[serde(default, alias = "distance")]
    pub dist: Option<String>,
    #[serde(default, alias = "star_type")]
    pub spect: Option<String>,
}

/// Canonical, typed catalog row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRow {
    pub id: Option<String>,
    pub proper: Option<String>,
    pub bayer: Option<String>,
    pub gliese: Option<String>,
    pub hip: Option<String>,
    pub hd: Option<String>,
    pub ra_hours: Option<f64>,
    pub dec_degrees: Option<f64>,
    pub distance_pc: Option<f64>,
    pub spectral_type: Option<String>,
}

impl RawStarRow {
    pub fn normalize(self) -> CatalogRow {
        CatalogRow {
            id: non_blank(self.id),
            proper: non_blank(self.proper),
            bayer: non_blank(self.bf),
            gliese: non_blank(self.gl),
            hip: non_blank(self.hip),
            hd: non_blank(self.hd),
            ra_hours: parse_finite(self.ra.as_deref()),
            dec_degrees: parse_finite(self.dec.as_deref()),
            distance_pc: parse_finite(self.dist.as_deref()),
            spectral_type: non_blank(self.spect),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_finite(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blanks() {
        let row = RawStarRow {
            id: Some("32263".to_string()),
            proper: Some("  ".to_string()),
            hip: Some(" 32349 ".to_string()),
            dist: Some("2.6371".to_string()),
            ..Default::default()
        };
        let normalized = row.normalize();
        assert_eq!(normalized.proper, None);
        assert_eq!(normalized.hip.as_deref(), Some("32349"));
        assert_eq!(normalized.distance_pc, Some(2.6371));
    }

    #[test]
    fn test_normalize_rejects_non_numeric_and_non_finite() {
        let row = RawStarRow {
            ra: Some("abc".to_string()),
            dec: Some("NaN".to_string()),
            dist: Some("inf".to_string()),
            ..Default::default()
        };
        let normalized = row.normalize();
        assert_eq!(normalized.ra_hours, None);
        assert_eq!(normalized.dec_degrees, None);
        assert_eq!(normalized.distance_pc, None);
    }

    #[test]
    fn test_alternate_column_names() {
        let data = "id,right_ascension,declination,dist,star_type\n7,1.5,-20.25,4.0,M4V\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawStarRow = reader.deserialize().next().unwrap().unwrap();
        let normalized = row.normalize();
        assert_eq!(normalized.ra_hours, Some(1.5));
        assert_eq!(normalized.dec_degrees, Some(-20.25));
        assert_eq!(normalized.spectral_type.as_deref(), Some("M4V"));
    }
}
