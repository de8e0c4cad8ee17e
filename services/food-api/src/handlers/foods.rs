//! `/api/foods` handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use lab_service::error::{Error, Result};
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::pipeline::{self, FoodListResponse};
use crate::query::parse_query;
use crate::state::FoodState;

/// `{ success, data }` for single-item lookups
#[derive(Debug, Serialize)]
pub struct FoodResponse {
    pub success: bool,
    pub data: CatalogItem,
}

/// `GET /api/foods/category/{category}` body
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub data: Vec<CatalogItem>,
    pub total: usize,
    /// Category as requested, before lower-casing
    pub category: String,
}

/// List foods with filtering, sorting and pagination
///
/// Never rejects a query: malformed parameters are ignored or defaulted.
pub async fn list_foods(
    State(state): State<FoodState>,
    Query(params): Query<HashMap<String, String>>,
) -> FoodListResponse {
    let spec = parse_query(&params);
    let catalog = state.catalog().load().await;
    tracing::debug!(items = catalog.len(), ?spec, "Listing foods");
    pipeline::run(catalog, &spec, state.collator())
}

/// All foods in one category, exact case-insensitive match
pub async fn foods_by_category(
    State(state): State<FoodState>,
    Path(category): Path<String>,
) -> Json<CategoryResponse> {
    let wanted = category.to_lowercase();
    let data: Vec<CatalogItem> = state
        .catalog()
        .load()
        .await
        .into_iter()
        .filter(|item| item.in_category(&wanted))
        .collect();

    Json(CategoryResponse {
        success: true,
        total: data.len(),
        data,
        category,
    })
}

/// One random food, optionally restricted to `?category=`
pub async fn random_food(
    State(state): State<FoodState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<FoodResponse>> {
    let mut foods = state.catalog().load().await;

    if let Some(category) = params.get("category").filter(|c| !c.is_empty()) {
        let wanted = category.to_lowercase();
        foods.retain(|item| item.in_category(&wanted));
    }

    let picked = foods
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| Error::NotFound("No foods available to random".to_string()))?;

    Ok(Json(FoodResponse {
        success: true,
        data: picked,
    }))
}

/// One food by numeric id
pub async fn get_food(
    State(state): State<FoodState>,
    Path(id): Path<String>,
) -> Result<Json<FoodResponse>> {
    let not_found = || Error::NotFound("Food not found".to_string());

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }

    let item = state
        .catalog()
        .load()
        .await
        .into_iter()
        .find(|item| item.id.to_string() == id)
        .ok_or_else(not_found)?;

    Ok(Json(FoodResponse {
        success: true,
        data: item,
    }))
}
