//! Router-level tests for the food catalog endpoints

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use food_api::{
    catalog::{CatalogItem, JsonFileCatalog, StaticCatalog},
    default_config, router, FoodState,
};
use serde_json::Value;
use tower::ServiceExt;

fn scenario_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1)
            .with_name("Tom Yum")
            .with_price(60.0)
            .with_spicy(3)
            .with_vegetarian(false),
        CatalogItem::new(2)
            .with_name("Som Tam")
            .with_price(40.0)
            .with_spicy(4)
            .with_vegetarian(true),
        CatalogItem::new(3)
            .with_name("Khao Soi")
            .with_price(55.0)
            .with_spicy(2)
            .with_vegetarian(false),
    ]
}

fn app_with(items: Vec<CatalogItem>) -> Router {
    router(FoodState::with_catalog(default_config(), StaticCatalog::new(items)))
}

fn app() -> Router {
    app_with(scenario_catalog())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn max_spicy_with_price_desc() {
    let (status, body) = get_json(app(), "/api/foods?maxSpicy=2&sort=price&order=desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![3]);
    assert_eq!(body["total"], 1);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["filters"]["maxSpicy"], 2.0);
    assert_eq!(body["filters"]["sort"], "price");
    assert_eq!(body["filters"]["order"], "desc");
}

#[tokio::test]
async fn vegetarian_only() {
    let (status, body) = get_json(app(), "/api/foods?vegetarian=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["total"], 1);
    assert_eq!(body["filters"]["vegetarian"], true);
}

#[tokio::test]
async fn page_past_end_is_empty_and_echoed() {
    let (status, body) = get_json(app(), "/api/foods?page=5&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["page"], 5);
    assert_eq!(body["limit"], 10);
}

#[tokio::test]
async fn malformed_min_price_is_ignored() {
    let (status, body) = get_json(app(), "/api/foods?minPrice=notanumber").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert!(body["filters"]["minPrice"].is_null());
}

#[tokio::test]
async fn blank_numeric_parameters_read_as_zero() {
    let (status, body) = get_json(app(), "/api/foods?maxSpicy=&minPrice=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["filters"]["maxSpicy"], 0.0);
    assert_eq!(body["filters"]["minPrice"], 0.0);

    let items = vec![
        CatalogItem::new(1).with_price(10.0),
        CatalogItem::new(2).with_price(10.0).with_spicy(1),
    ];
    let (_, body) = get_json(app_with(items), "/api/foods?maxSpicy=%20").await;
    assert_eq!(ids(&body), vec![1]);
}

#[tokio::test]
async fn very_large_page_is_echoed_as_requested() {
    let (status, body) = get_json(app(), "/api/foods?page=99999999999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
    assert_eq!(body["page"], 99_999_999_999_u64);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn malformed_parameters_never_fail() {
    let (status, body) = get_json(
        app(),
        "/api/foods?vegetarian=perhaps&maxSpicy=hot&sort=calories&order=sideways&page=x&limit=-4",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["totalPages"], 3);
    assert!(body["filters"]["vegetarian"].is_null());
    assert!(body["filters"]["maxSpicy"].is_null());
    assert_eq!(body["filters"]["sort"], "name");
    assert_eq!(body["filters"]["order"], "asc");
}

#[tokio::test]
async fn default_listing_is_sorted_by_name() {
    let (_, body) = get_json(app(), "/api/foods").await;
    assert_eq!(ids(&body), vec![3, 2, 1]);
    assert_eq!(body["limit"], 50);
    assert!(body["filters"]["search"].is_null());
}

#[tokio::test]
async fn search_echoes_normalized_text() {
    let (_, body) = get_json(app(), "/api/foods?search=%20TOM%20").await;
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body["filters"]["search"], "tom");
}

#[tokio::test]
async fn order_reverses_without_ties_and_keeps_membership() {
    let (_, asc) = get_json(app(), "/api/foods?sort=price").await;
    let (_, desc) = get_json(app(), "/api/foods?sort=price&order=desc").await;

    let mut reversed = ids(&desc);
    reversed.reverse();
    assert_eq!(ids(&asc), reversed);
    assert_eq!(ids(&asc), vec![2, 3, 1]);
}

#[tokio::test]
async fn equal_keys_keep_catalog_order() {
    let items = vec![
        CatalogItem::new(10).with_name("Larb").with_spicy(2),
        CatalogItem::new(11).with_name("Gaeng Om").with_spicy(2),
        CatalogItem::new(12).with_name("Kai Jeow").with_spicy(1),
        CatalogItem::new(13).with_name("Nam Tok").with_spicy(2),
    ];

    let (_, asc) = get_json(app_with(items.clone()), "/api/foods?sort=spicy").await;
    assert_eq!(ids(&asc), vec![12, 10, 11, 13]);

    let (_, desc) = get_json(app_with(items), "/api/foods?sort=spicy&order=desc").await;
    assert_eq!(ids(&desc), vec![10, 11, 13, 12]);
}

#[tokio::test]
async fn adding_filters_only_narrows() {
    let (_, wide) = get_json(app(), "/api/foods?maxSpicy=3").await;
    let (_, narrow) = get_json(app(), "/api/foods?maxSpicy=3&minPrice=56").await;

    let wide = ids(&wide);
    let narrow = ids(&narrow);
    assert_eq!(narrow, vec![1]);
    assert!(narrow.iter().all(|id| wide.contains(id)));
}

#[tokio::test]
async fn malformed_and_fractional_spicy_levels_fail_max_spicy() {
    let items: Vec<CatalogItem> = serde_json::from_value(serde_json::json!([
        { "id": 1, "name": "a", "spicy": "hot" },
        { "id": 2, "name": "b", "spicy": 2.5 },
        { "id": 3, "name": "c", "spicy": 4 }
    ]))
    .unwrap();

    let (status, body) = get_json(app_with(items.clone()), "/api/foods?maxSpicy=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());

    let (_, body) = get_json(app_with(items.clone()), "/api/foods?maxSpicy=3").await;
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["data"][0]["spicy"], 2.5);

    // Unreadable levels still list, sorted as 0, and echo as given
    let (_, body) = get_json(app_with(items), "/api/foods?sort=spicy").await;
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body["data"][0]["spicy"], "hot");
}

#[tokio::test]
async fn page_size_never_exceeds_limit() {
    let items: Vec<CatalogItem> = (1..=37)
        .map(|id| CatalogItem::new(id).with_name(format!("dish {id:02}")))
        .collect();

    for (limit, page) in [(1, 1), (5, 8), (10, 4), (100, 1), (7, 6)] {
        let uri = format!("/api/foods?limit={limit}&page={page}");
        let (_, body) = get_json(app_with(items.clone()), &uri).await;
        assert!(ids(&body).len() <= limit, "{uri}");
        assert_eq!(body["totalPages"], 37_usize.div_ceil(limit).max(1), "{uri}");
    }
}

#[tokio::test]
async fn unreadable_catalog_gives_empty_listing() {
    let state = FoodState::with_catalog(default_config(), JsonFileCatalog::new("/nonexistent/foods.json"));
    let (status, body) = get_json(router(state), "/api/foods").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["totalPages"], 1);
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn catalog_file_is_reread_per_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foods.json");
    std::fs::write(&path, r#"[{"id": 1, "name": "Pad Thai", "image": "/img/pt.jpg"}]"#).unwrap();

    let app = router(FoodState::with_catalog(default_config(), JsonFileCatalog::new(&path)));

    let (_, first) = get_json(app.clone(), "/api/foods").await;
    assert_eq!(first["total"], 1);
    assert_eq!(first["data"][0]["image"], "/img/pt.jpg");

    std::fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#).unwrap();
    let (_, second) = get_json(app, "/api/foods").await;
    assert_eq!(second["total"], 2);
}

#[tokio::test]
async fn get_one_by_id() {
    let (status, body) = get_json(app(), "/api/foods/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Som Tam");

    let (status, body) = get_json(app(), "/api/foods/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Food not found");

    let (status, _) = get_json(app(), "/api/foods/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn by_category_is_exact_and_case_insensitive() {
    let items = vec![
        CatalogItem::new(1).with_category("Dessert"),
        CatalogItem::new(2).with_category("dessert"),
        CatalogItem::new(3).with_category("Desserts"),
    ];
    let (status, body) = get_json(app_with(items), "/api/foods/category/DESSERT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["total"], 2);
    assert_eq!(body["category"], "DESSERT");
}

#[tokio::test]
async fn random_pick() {
    let items = vec![
        CatalogItem::new(1).with_category("soup"),
        CatalogItem::new(2).with_category("salad"),
    ];

    let (status, body) = get_json(app_with(items.clone()), "/api/foods/random?category=Salad").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 2);

    let (status, body) = get_json(app_with(items), "/api/foods/random?category=curry").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No foods available to random");

    let (status, _) = get_json(app_with(Vec::new()), "/api/foods/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_endpoint() {
    let (status, body) = get_json(app(), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["byCategory"]["unknown"], 3);
    assert_eq!(body["vegetarian"]["true"], 1);
    assert_eq!(body["vegetarian"]["false"], 2);
    assert_eq!(body["price"]["min"], 40.0);
    assert_eq!(body["price"]["max"], 60.0);
    assert_eq!(body["price"]["avg"], 51.67);
    assert_eq!(body["bySpicyLevel"]["4"], 1);
}

#[tokio::test]
async fn welcome_docs_and_health() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["foods"], "/api/foods");

    let (status, body) = get_json(app(), "/api/docs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["baseUrl"], "/api/foods");

    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "food-api");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (status, body) = get_json(app(), "/api/drinks").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "API endpoint not found");
    assert_eq!(body["requestedUrl"], "/api/drinks");
}
