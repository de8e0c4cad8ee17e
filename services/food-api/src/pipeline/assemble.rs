//! Listing response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::paginate::Page;
use crate::catalog::CatalogItem;
use crate::query::{QuerySpec, SortKey, SortOrder};

/// Filters as actually applied, `null` meaning not applied
///
/// Values are the parsed ones, not the raw query strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub max_spicy: Option<f64>,
    pub vegetarian: Option<bool>,
    pub available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl From<&QuerySpec> for AppliedFilters {
    fn from(spec: &QuerySpec) -> Self {
        Self {
            search: spec.search.clone(),
            category: spec.category.clone(),
            max_spicy: spec.max_spicy,
            vegetarian: spec.vegetarian,
            available: spec.available,
            min_price: spec.min_price,
            max_price: spec.max_price,
            sort: spec.sort_key,
            order: spec.sort_order,
        }
    }
}

/// Body of `GET /api/foods`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListResponse {
    pub success: bool,
    pub data: Vec<CatalogItem>,
    pub page: u64,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
    pub filters: AppliedFilters,
}

/// Combine a page with the query that produced it
pub fn assemble(page: Page, spec: &QuerySpec) -> FoodListResponse {
    FoodListResponse {
        success: true,
        data: page.items,
        page: page.page,
        limit: page.limit,
        total: page.total,
        total_pages: page.total_pages,
        filters: AppliedFilters::from(spec),
    }
}

impl IntoResponse for FoodListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
