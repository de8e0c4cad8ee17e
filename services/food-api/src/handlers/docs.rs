//! Welcome and documentation payloads

use axum::Json;
use serde_json::{json, Value};

use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};

/// `GET /`
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Food API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "foods": "/api/foods",
            "search": "/api/foods?search=ผัด",
            "category": "/api/foods?category=แกง",
            "spicy": "/api/foods?maxSpicy=3",
            "vegetarian": "/api/foods?vegetarian=true",
            "random": "/api/foods/random",
            "documentation": "/api/docs",
            "stats": "/api/stats",
            "health": "/health"
        }
    }))
}

/// `GET /api/docs`
pub async fn docs() -> Json<Value> {
    Json(json!({
        "title": "Food API - Documentation",
        "baseUrl": "/api/foods",
        "methods": {
            "list": {
                "method": "GET",
                "path": "/api/foods",
                "query": {
                    "search": "text found in name or description (e.g. ?search=ผัด)",
                    "category": "exact category, case-insensitive (e.g. ?category=แกง)",
                    "maxSpicy": "highest spicy level; items without one count as 0",
                    "vegetarian": "true|false|1|0|yes|no|y|n",
                    "available": "true|false|1|0|yes|no|y|n",
                    "minPrice": "lowest price (e.g. ?minPrice=40)",
                    "maxPrice": "highest price (e.g. ?maxPrice=80)",
                    "sort": "name|price|spicy (default name)",
                    "order": "asc|desc (default asc)",
                    "page": "page number, starting at 1",
                    "limit": format!("items per page (max {MAX_LIMIT}; default {DEFAULT_LIMIT})")
                }
            },
            "getOne": { "method": "GET", "path": "/api/foods/{id}" },
            "byCategory": { "method": "GET", "path": "/api/foods/category/{category}" },
            "random": { "method": "GET", "path": "/api/foods/random", "query": { "category": "optional" } },
            "stats": { "method": "GET", "path": "/api/stats" }
        },
        "examples": [
            "/api/foods?search=ผัด",
            "/api/foods?category=dessert&minPrice=40&maxPrice=80&sort=price&order=asc",
            "/api/foods?vegetarian=true&page=2&limit=5",
            "/api/foods?minPrice=40&maxPrice=80&sort=spicy&order=desc"
        ]
    }))
}
