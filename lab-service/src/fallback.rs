//! Fallback handling for paths no route matches

use std::path::Path;

use axum::{
    handler::{Handler, HandlerWithoutStateExt},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;

/// JSON 404 for unknown endpoints
///
/// Body: `{ "success": false, "message": "API endpoint not found", "requestedUrl": "..." }`
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "API endpoint not found",
            "requestedUrl": uri.to_string(),
        })),
    )
}

/// Install `handler` as the router fallback, serving files from
/// `static_dir` first when one is configured
pub fn with_fallback<H, T>(router: Router, static_dir: Option<&Path>, handler: H) -> Router
where
    H: Handler<T, ()>,
    T: 'static,
{
    match static_dir {
        Some(dir) => {
            tracing::debug!("Serving static files from {}", dir.display());
            let files = ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .fallback(handler.into_service());
            router.fallback_service(files)
        }
        None => router.fallback(handler),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, body::to_bytes, http::Request, routing::get};
    use tower::ServiceExt;

    async fn get_path(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let app = with_fallback(Router::new().route("/health", get(|| async { "ok" })), None, not_found);

        let (status, bytes) = get_path(app, "/nope?x=1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "API endpoint not found");
        assert_eq!(body["requestedUrl"], "/nope?x=1");
    }

    #[tokio::test]
    async fn test_static_dir_served_before_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>menu</h1>").unwrap();

        let app = with_fallback(Router::new(), Some(dir.path()), not_found);

        let (status, bytes) = get_path(app.clone(), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"<h1>menu</h1>");

        let (status, _) = get_path(app, "/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
