//! Normalized listing request
//!
//! A [`QuerySpec`] holds what a `GET /api/foods` request asks for after
//! every parameter has been parsed, defaulted and clamped. An unset filter
//! field means the filter is not applied.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_LIMIT: u32 = 50;

/// Maximum allowed items per page
pub const MAX_LIMIT: u32 = 100;

/// Field a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Spicy,
}

impl SortKey {
    /// Parse an exact key name
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "spicy" => Some(Self::Spicy),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Spicy => "spicy",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending (A-Z, cheapest first)
    #[default]
    Asc,
    /// Descending (Z-A, most expensive first)
    Desc,
}

impl SortOrder {
    /// Only the exact string `desc` selects descending order
    pub fn from_param(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Apply this direction to an ascending comparison
    #[must_use]
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Filter, sort and page intent of one listing request
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Lower-cased, trimmed search text
    pub search: Option<String>,
    /// Lower-cased, trimmed category
    pub category: Option<String>,
    pub max_spicy: Option<f64>,
    pub vegetarian: Option<bool>,
    pub available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// Always at least 1
    pub page: u64,
    /// Always within `1..=MAX_LIMIT`
    pub limit: u32,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            max_spicy: None,
            vegetarian: None,
            available: None,
            min_price: None,
            max_price: None,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QuerySpec {
    /// Zero-based index of the first item on the requested page
    pub fn offset(&self) -> usize {
        usize::try_from(self.page.saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(self.limit as usize)
    }
}
