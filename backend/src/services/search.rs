//! Star name search.

use crate::models::StarRecord;

/// Maximum results returned by [`search_stars`].
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Case-insensitive substring match on star names, in catalog order.
///
/// A blank query returns nothing.
pub fn search_stars<'a>(records: &'a [StarRecord], query: &str) -> Vec<&'a StarRecord> {
    search_indices(records, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Like [`search_stars`] but returns catalog indices.
pub fn search_indices(records: &[StarRecord], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarComponent;

    fn named(names: &[&str]) -> Vec<StarRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| StarRecord {
                name: n.to_string(),
                distance_ly: 1.0 + i as f64,
                distance_pc: 0.3,
                ra: "00h00m00s".to_string(),
                dec: "+00°00′00″".to_string(),
                components: vec![StarComponent::new(*n, "G2V")],
            })
            .collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let records = named(&["Sirius", "Alpha Centauri A", "Proxima Centauri", "Barnard's Star"]);
        let hits: Vec<&str> = search_stars(&records, "CENT").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Alpha Centauri A", "Proxima Centauri"]);
    }

    #[test]
    fn test_blank_query() {
        let records = named(&["Sirius"]);
        assert!(search_stars(&records, "").is_empty());
        assert!(search_stars(&records, "   ").is_empty());
    }

    #[test]
    fn test_result_limit() {
        let names: Vec<String> = (0..25).map(|i| format!("Star {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let records = named(&refs);
        let hits = search_indices(&records, "star");
        assert_eq!(hits.len(), MAX_SEARCH_RESULTS);
        assert_eq!(hits, (0..10).collect::<Vec<_>>());
    }
}
