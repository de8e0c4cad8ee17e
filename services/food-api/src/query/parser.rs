//! Query string to [`QuerySpec`]
//!
//! Parsing never fails. A malformed value disables its filter or falls
//! back to the default, so the listing always answers with some page.

use std::collections::HashMap;

use lab_service::params::{positive_int, ZeroAs};

use super::spec::{QuerySpec, SortKey, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};

/// Build a [`QuerySpec`] from raw query parameters
///
/// Recognized names: `search`, `category`, `maxSpicy`, `vegetarian`,
/// `available`, `minPrice`, `maxPrice`, `sort`, `order`, `page`, `limit`.
/// Anything else is ignored.
pub fn parse_query(params: &HashMap<String, String>) -> QuerySpec {
    let get = |name: &str| params.get(name).map(String::as_str);

    let page = positive_int(get("page"), 1, ZeroAs::One);
    let limit = positive_int(get("limit"), u64::from(DEFAULT_LIMIT), ZeroAs::One)
        .min(u64::from(MAX_LIMIT));

    QuerySpec {
        search: get("search").and_then(normalize_text),
        category: get("category").and_then(normalize_text),
        max_spicy: get("maxSpicy").and_then(parse_number),
        vegetarian: get("vegetarian").and_then(parse_bool),
        available: get("available").and_then(parse_bool),
        min_price: get("minPrice").and_then(parse_number),
        max_price: get("maxPrice").and_then(parse_number),
        sort_key: get("sort").and_then(SortKey::from_param).unwrap_or_default(),
        sort_order: get("order").map(SortOrder::from_param).unwrap_or_default(),
        page,
        // At most MAX_LIMIT
        limit: u32::try_from(limit).unwrap_or(MAX_LIMIT),
    }
}

/// Trim and lower-case; empty means absent
fn normalize_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_lowercase())
}

/// A finite decimal number, surrounding whitespace allowed; blank is 0
fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Recognized boolean tokens, case-insensitive
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
