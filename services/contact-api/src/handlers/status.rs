//! Service status and documentation

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use lab_service::error::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::ContactState;
use crate::store::{CONTACTS_FILE, FEEDBACK_FILE};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    pub window_ms: u64,
    pub max: u32,
}

/// `GET /api/status` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub success: bool,
    pub service: String,
    pub version: String,
    pub uptime_sec: u64,
    pub timestamp: String,
    /// Records per data file
    pub counts: BTreeMap<String, usize>,
    pub docs: String,
    pub rate_limit: Option<RateLimitInfo>,
}

pub async fn status(State(state): State<ContactState>) -> Result<Json<StatusResponse>> {
    let mut counts = BTreeMap::new();
    for file in [CONTACTS_FILE, FEEDBACK_FILE] {
        counts.insert(file.to_string(), state.store().count(file).await?);
    }

    let app = state.app();
    let rate_limit = app.config().rate_limit.as_ref().map(|limit| RateLimitInfo {
        window_ms: limit.window_secs.saturating_mul(1000),
        max: limit.max_requests,
    });

    Ok(Json(StatusResponse {
        success: true,
        service: "Contact Form API".to_string(),
        version: app.version().to_string(),
        uptime_sec: app.uptime().as_secs(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        counts,
        docs: "/api/docs".to_string(),
        rate_limit,
    }))
}

pub async fn docs() -> Json<Value> {
    Json(json!({
        "title": "Contact Form API Documentation",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/contact": {
                "description": "Submit contact form",
                "requiredFields": ["name", "email", "subject", "message"],
                "optionalFields": ["phone", "company"]
            },
            "GET /api/contact": {
                "description": "List contact submissions",
                "parameters": {
                    "page": "Page number (default: 1)",
                    "limit": "Items per page (default: 10)"
                }
            },
            "POST /api/feedback": {
                "description": "Submit feedback",
                "requiredFields": ["rating", "comment"],
                "optionalFields": ["email"]
            },
            "GET /api/feedback/stats": {
                "description": "Feedback statistics"
            },
            "GET /api/status": {
                "description": "Service status and stored record counts"
            }
        }
    }))
}
