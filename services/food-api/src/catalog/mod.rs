//! The food catalog and where it comes from

pub mod item;
pub mod source;

pub use item::CatalogItem;
pub use source::{CatalogSource, JsonFileCatalog, StaticCatalog};

use serde_json::Value;

/// Decode a catalog document
///
/// The document must be a JSON array of objects. Records that cannot be
/// decoded are skipped with a warning; a document that is not an array at
/// all yields an empty catalog. Never fails.
pub fn parse_catalog(bytes: &[u8]) -> Vec<CatalogItem> {
    let document: Value = match serde_json::from_slice(bytes) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "Catalog is not valid JSON");
            return Vec::new();
        }
    };

    let Value::Array(records) = document else {
        tracing::error!("Catalog top level is not an array");
        return Vec::new();
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed catalog record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_order_and_skips_bad_records() {
        let items = parse_catalog(
            br#"[
                {"id": 2, "name": "Som Tam"},
                {"name": "missing id"},
                42,
                {"id": 1, "name": "Tom Yum"}
            ]"#,
        );
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_parse_catalog_degrades_to_empty() {
        assert!(parse_catalog(b"not json").is_empty());
        assert!(parse_catalog(br#"{"foods": []}"#).is_empty());
        assert!(parse_catalog(b"").is_empty());
    }
}
