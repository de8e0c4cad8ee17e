//! Submission validation and sanitizing
//!
//! Bodies are checked field by field and every failure is reported, as
//! `field: reason`, in one 400 response. Non-string scalars are accepted
//! and stringified before checking.

use std::sync::LazyLock;

use lab_service::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,10}$").expect("phone regex is valid"));

/// Sanitized contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    /// Lower-cased
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Sanitized feedback entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    /// Lower-cased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Collected `field: reason` messages
#[derive(Debug, Default)]
struct FieldErrors(Vec<String>);

impl FieldErrors {
    fn push(&mut self, field: &str, reason: impl AsRef<str>) {
        self.0.push(format!("{field}: {}", reason.as_ref()));
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Error> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(Error::validation(self.0))
        }
    }
}

fn invalid_body() -> Error {
    Error::validation(vec!["request: invalid body".to_string()])
}

/// Field as text; `null` and absent give `None`
fn text(body: &Map<String, Value>, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Check a required field's trimmed length
fn required_len(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    match value {
        None | Some("") => errors.push(field, "is required"),
        Some(value) => {
            let len = value.trim().chars().count();
            if len < min {
                errors.push(field, format!("must be at least {min} characters"));
            }
            if len > max {
                errors.push(field, format!("must be at most {max} characters"));
            }
        }
    }
}

/// Present and non-empty
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validate a `POST /api/contact` body
pub fn validate_contact(body: &Value) -> Result<ContactSubmission, Error> {
    let body = body.as_object().ok_or_else(invalid_body)?;
    let mut errors = FieldErrors::default();

    let name = text(body, "name");
    let email = text(body, "email");
    let subject = text(body, "subject");
    let message = text(body, "message");
    let phone = text(body, "phone");
    let company = text(body, "company");

    required_len(&mut errors, "name", name.as_deref(), 2, 100);

    match provided(&email) {
        None => errors.push("email", "is required"),
        Some(email) if !EMAIL_REGEX.is_match(email.trim()) => {
            errors.push("email", "invalid email format")
        }
        Some(_) => {}
    }

    required_len(&mut errors, "subject", subject.as_deref(), 5, 200);
    required_len(&mut errors, "message", message.as_deref(), 10, 1000);

    if let Some(phone) = provided(&phone) {
        if !PHONE_REGEX.is_match(phone.trim()) {
            errors.push("phone", "must be 9-10 digits");
        }
    }

    if let Some(company) = provided(&company) {
        if company.trim().chars().count() > 100 {
            errors.push("company", "must be at most 100 characters");
        }
    }

    let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();
    let optional = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    errors.finish(|| ContactSubmission {
        name: trimmed(name),
        email: trimmed(email).to_lowercase(),
        subject: trimmed(subject),
        message: trimmed(message),
        phone: optional(phone),
        company: optional(company),
    })
}

/// Numeric value of a rating field, NaN when it is not a number
pub(crate) fn rating_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => f64::NAN,
    }
}

/// Validate a `POST /api/feedback` body
pub fn validate_feedback(body: &Value) -> Result<FeedbackSubmission, Error> {
    let body = body.as_object().ok_or_else(invalid_body)?;
    let mut errors = FieldErrors::default();

    let rating = match body.get("rating") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(rating_number(value)),
    };

    let mut valid_rating = 0u8;
    match rating {
        None => errors.push("rating", "is required and must be a number"),
        Some(r) if r.is_nan() => errors.push("rating", "is required and must be a number"),
        Some(r) => {
            if r.fract() != 0.0 {
                errors.push("rating", "must be an integer from 1 to 5");
            }
            if !(1.0..=5.0).contains(&r) {
                errors.push("rating", "must be between 1 and 5");
            }
            if r.fract() == 0.0 && (1.0..=5.0).contains(&r) {
                valid_rating = r as u8;
            }
        }
    }

    let comment = text(body, "comment");
    required_len(&mut errors, "comment", comment.as_deref(), 5, 500);

    let email = text(body, "email");
    if let Some(email) = provided(&email) {
        if !EMAIL_REGEX.is_match(email.trim()) {
            errors.push("email", "invalid email format");
        }
    }

    errors.finish(|| FeedbackSubmission {
        rating: valid_rating,
        comment: comment.map(|c| c.trim().to_string()).unwrap_or_default(),
        email: email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn errors_of(err: Error) -> Vec<String> {
        match err {
            Error::Validation { errors, .. } => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn valid_contact() -> Value {
        json!({
            "name": "  Somchai Jaidee ",
            "email": " Somchai@Example.COM ",
            "subject": "Table booking",
            "message": "Do you have a table for six on Friday?",
            "phone": "0812345678"
        })
    }

    #[test]
    fn test_valid_contact_is_sanitized() {
        let contact = validate_contact(&valid_contact()).unwrap();
        assert_eq!(contact.name, "Somchai Jaidee");
        assert_eq!(contact.email, "somchai@example.com");
        assert_eq!(contact.phone.as_deref(), Some("0812345678"));
        assert_eq!(contact.company, None);
    }

    #[test]
    fn test_every_failure_is_reported() {
        let errors = errors_of(
            validate_contact(&json!({
                "name": "A",
                "email": "not-an-email",
                "message": "short",
                "phone": "12-34",
                "company": "x".repeat(101)
            }))
            .unwrap_err(),
        );
        assert_eq!(
            errors,
            vec![
                "name: must be at least 2 characters",
                "email: invalid email format",
                "subject: is required",
                "message: must be at least 10 characters",
                "phone: must be 9-10 digits",
                "company: must be at most 100 characters",
            ]
        );
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let mut body = valid_contact();
        body["phone"] = json!(812345678);
        let contact = validate_contact(&body).unwrap();
        assert_eq!(contact.phone.as_deref(), Some("812345678"));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let errors = errors_of(validate_contact(&json!(["name"])).unwrap_err());
        assert_eq!(errors, vec!["request: invalid body"]);
    }

    #[test]
    fn test_feedback_accepts_numeric_string_rating() {
        let feedback = validate_feedback(&json!({
            "rating": " 4 ",
            "comment": "  Great khao soi  ",
            "email": "Guest@Example.com"
        }))
        .unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.comment, "Great khao soi");
        assert_eq!(feedback.email.as_deref(), Some("guest@example.com"));
    }

    #[test]
    fn test_feedback_rating_rules() {
        let missing = errors_of(validate_feedback(&json!({ "comment": "Lovely food" })).unwrap_err());
        assert_eq!(missing, vec!["rating: is required and must be a number"]);

        let fractional =
            errors_of(validate_feedback(&json!({ "rating": 4.5, "comment": "Lovely food" })).unwrap_err());
        assert_eq!(fractional, vec!["rating: must be an integer from 1 to 5"]);

        let out_of_range =
            errors_of(validate_feedback(&json!({ "rating": 9, "comment": "Lovely food" })).unwrap_err());
        assert_eq!(out_of_range, vec!["rating: must be between 1 and 5"]);

        let word = errors_of(validate_feedback(&json!({ "rating": "five", "comment": "ok" })).unwrap_err());
        assert_eq!(
            word,
            vec![
                "rating: is required and must be a number",
                "comment: must be at least 5 characters",
            ]
        );
    }
}
