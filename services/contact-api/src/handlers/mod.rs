//! HTTP handlers

pub mod contact;
pub mod feedback;
pub mod status;

pub use contact::{list_contacts, submit_contact};
pub use feedback::{feedback_stats, submit_feedback};
pub use status::{docs, status};

use axum::{extract::rejection::JsonRejection, Json};
use lab_service::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// `{ success: true, data }` for a stored submission
#[derive(Debug, Serialize)]
pub struct Saved<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Saved<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Unwrap a JSON body, reporting any rejection as an invalid body
fn json_body(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(Error::validation(vec!["request: invalid body".to_string()]))
        }
    }
}
