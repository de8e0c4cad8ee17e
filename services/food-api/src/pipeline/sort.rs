//! Stable ordering of filtered items
//!
//! Items whose keys compare equal keep their incoming order, in both
//! directions.

use std::cmp::Ordering;

use crate::catalog::CatalogItem;
use crate::collation::Collator;
use crate::query::{SortKey, SortOrder};

/// Orders items by one key under a collation
pub struct Sorter<'a> {
    collator: &'a dyn Collator,
}

impl<'a> Sorter<'a> {
    pub fn new(collator: &'a dyn Collator) -> Self {
        Self { collator }
    }

    /// Sort `items` by `key` in `order`
    pub fn sort(&self, items: Vec<CatalogItem>, key: SortKey, order: SortOrder) -> Vec<CatalogItem> {
        match key {
            SortKey::Name => {
                // Build each collation key once
                let mut keyed: Vec<(String, CatalogItem)> = items
                    .into_iter()
                    .map(|item| (self.collator.sort_key(item.name_or_empty()), item))
                    .collect();
                keyed.sort_by(|(a, _), (b, _)| order.apply(a.cmp(b)));
                keyed.into_iter().map(|(_, item)| item).collect()
            }
            SortKey::Price => sort_numeric(items, order, CatalogItem::price_sort_key),
            SortKey::Spicy => sort_numeric(items, order, CatalogItem::spicy_sort_key),
        }
    }
}

fn sort_numeric(
    mut items: Vec<CatalogItem>,
    order: SortOrder,
    key: impl Fn(&CatalogItem) -> f64,
) -> Vec<CatalogItem> {
    items.sort_by(|a, b| order.apply(key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal)));
    items
}
