//! `/api/feedback` handlers

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use lab_service::error::Result;
use serde::Serialize;
use serde_json::Value;

use super::{json_body, Saved};
use crate::state::ContactState;
use crate::store::{Stored, FEEDBACK_FILE};
use crate::validation::{rating_number, validate_feedback, FeedbackSubmission};

/// `GET /api/feedback/stats` body
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub success: bool,
    pub total: usize,
    /// Sum of valid ratings over all entries, 2 decimals; 0 when empty
    pub average: f64,
    /// Count per rating, keys `"1"` to `"5"`
    pub by_rating: BTreeMap<String, usize>,
}

impl FeedbackStats {
    pub fn compute(entries: &[Value]) -> Self {
        let mut by_rating: BTreeMap<String, usize> =
            (1..=5).map(|r: u8| (r.to_string(), 0)).collect();
        let mut sum = 0.0;

        for entry in entries {
            let rating = entry.get("rating").map(rating_number).unwrap_or(f64::NAN);
            if rating.fract() == 0.0 && (1.0..=5.0).contains(&rating) {
                if let Some(count) = by_rating.get_mut(&(rating as u8).to_string()) {
                    *count += 1;
                }
                sum += rating;
            }
        }

        let total = entries.len();
        let average = if total == 0 {
            0.0
        } else {
            (sum / total as f64 * 100.0).round() / 100.0
        };

        Self {
            success: true,
            total,
            average,
            by_rating,
        }
    }
}

/// Validate and store a feedback entry
pub async fn submit_feedback(
    State(state): State<ContactState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Saved<Stored<FeedbackSubmission>>>> {
    let submission = validate_feedback(&json_body(body)?)?;
    let saved = state.store().append(FEEDBACK_FILE, submission).await?;
    Ok(Json(Saved::new(saved)))
}

/// Rating distribution and average
pub async fn feedback_stats(State(state): State<ContactState>) -> Result<Json<FeedbackStats>> {
    let entries = state.store().read_all(FEEDBACK_FILE).await?;
    Ok(Json(FeedbackStats::compute(&entries)))
}
