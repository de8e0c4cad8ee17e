//! Catalog statistics

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::state::FoodState;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub vegetarian: VegetarianCounts,
    pub price: PriceSummary,
    pub by_spicy_level: BTreeMap<String, usize>,
    pub last_updated: String,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct VegetarianCounts {
    #[serde(rename = "true")]
    pub yes: usize,
    #[serde(rename = "false")]
    pub no: usize,
}

/// Price range over items with a usable price; all `null` when none have one
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct PriceSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Rounded to 2 decimals
    pub avg: Option<f64>,
}

impl CatalogStats {
    pub fn compute(items: &[CatalogItem]) -> Self {
        let mut by_category = BTreeMap::new();
        let mut by_spicy_level = BTreeMap::new();
        let mut vegetarian = VegetarianCounts::default();

        for item in items {
            let category = item
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or("unknown");
            *by_category.entry(category.to_string()).or_insert(0) += 1;

            if item.is_vegetarian() {
                vegetarian.yes += 1;
            } else {
                vegetarian.no += 1;
            }

            if let Some(level) = item.spicy_label() {
                *by_spicy_level.entry(level).or_insert(0) += 1;
            }
        }

        Self {
            total: items.len(),
            by_category,
            vegetarian,
            price: PriceSummary::compute(items),
            by_spicy_level,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl PriceSummary {
    fn compute(items: &[CatalogItem]) -> Self {
        let prices: Vec<f64> = items
            .iter()
            .filter_map(|item| item.price)
            .filter(|p| p.is_finite())
            .collect();

        if prices.is_empty() {
            return Self::default();
        }

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = prices.iter().sum::<f64>() / prices.len() as f64;

        Self {
            min: Some(min),
            max: Some(max),
            avg: Some((avg * 100.0).round() / 100.0),
        }
    }
}

/// `GET /api/stats`
pub async fn stats(State(state): State<FoodState>) -> Json<CatalogStats> {
    let items = state.catalog().load().await;
    Json(CatalogStats::compute(&items))
}
