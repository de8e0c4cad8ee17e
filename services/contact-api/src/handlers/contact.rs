//! `/api/contact` handlers

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use lab_service::error::Result;
use lab_service::params::{positive_int, ZeroAs};
use serde::Serialize;
use serde_json::Value;

use super::{json_body, Saved};
use crate::store::{Stored, CONTACTS_FILE};
use crate::validation::{validate_contact, ContactSubmission};
use crate::state::ContactState;

const DEFAULT_PAGE_SIZE: usize = 10;

/// `GET /api/contact` body
#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub success: bool,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
    pub items: Vec<Value>,
}

/// Validate and store a contact form
pub async fn submit_contact(
    State(state): State<ContactState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Saved<Stored<ContactSubmission>>>> {
    let submission = validate_contact(&json_body(body)?)?;
    let saved = state.store().append(CONTACTS_FILE, submission).await?;
    Ok(Json(Saved::new(saved)))
}

/// Page through stored contact submissions
///
/// `page` and `limit` fall back to 1 and 10 when missing, zero or not a
/// number. There is no upper bound on `limit`.
pub async fn list_contacts(
    State(state): State<ContactState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ContactPage>> {
    let param = |name: &str, default: usize| {
        let raw = params.get(name).map(String::as_str);
        let value = positive_int(raw, default as u64, ZeroAs::Default);
        usize::try_from(value).unwrap_or(usize::MAX)
    };
    let page = param("page", 1);
    let limit = param("limit", DEFAULT_PAGE_SIZE);

    let all = state.store().read_all(CONTACTS_FILE).await?;
    let total = all.len();
    let pages = total.div_ceil(limit).max(1);
    let items = all
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();

    Ok(Json(ContactPage {
        success: true,
        page,
        limit,
        total,
        pages,
        items,
    }))
}
