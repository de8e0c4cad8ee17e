//! Catalog records and their lenient decoding
//!
//! Catalog files are hand-edited, so fields arrive with whatever JSON type
//! the author typed. Each field has a fixed coercion rule, applied once at
//! load time; the query pipeline only ever sees the typed record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dish in the catalog
///
/// Fields not listed here (`image`, `tags`, ...) are kept in `extra` and
/// echoed back unchanged when the item is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalogItem")]
pub struct CatalogItem {
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// `Some(NaN)` when the source had a price that is not a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Spicy level exactly as the catalog gave it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spicy: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// A bare item with only an id, for building fixtures
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: None,
            description: None,
            category: None,
            price: None,
            spicy: None,
            vegetarian: None,
            available: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_spicy(mut self, spicy: impl Into<Value>) -> Self {
        self.spicy = Some(spicy.into());
        self
    }

    #[must_use]
    pub fn with_vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = Some(vegetarian);
        self
    }

    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Name, or empty text when absent
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Description, or empty text when absent
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Price for bound checks: NaN when absent or malformed, so every
    /// comparison fails
    pub fn price_or_nan(&self) -> f64 {
        self.price.unwrap_or(f64::NAN)
    }

    /// Price for ordering: absent and malformed prices sort as 0
    pub fn price_sort_key(&self) -> f64 {
        self.price.filter(|p| !p.is_nan()).unwrap_or(0.0)
    }

    /// Spicy level for bound checks
    ///
    /// Absent, `null` and empty text count as 0. Anything that does not read
    /// as a number is NaN, so it fails every bound.
    pub fn spicy_level(&self) -> f64 {
        match &self.spicy {
            None | Some(Value::Null) => 0.0,
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(s)) if s.trim().is_empty() => 0.0,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(f64::NAN),
            Some(Value::Bool(b)) => f64::from(u8::from(*b)),
            Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
        }
    }

    /// Spicy level for ordering: malformed levels sort as 0
    pub fn spicy_sort_key(&self) -> f64 {
        let level = self.spicy_level();
        if level.is_nan() {
            0.0
        } else {
            level
        }
    }

    /// Stats bucket for the spicy level, `None` when absent or `null`
    pub fn spicy_label(&self) -> Option<String> {
        match self.spicy.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian.unwrap_or(false)
    }

    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(false)
    }

    /// Case-insensitive exact category match against an already lower-cased
    /// needle
    pub fn in_category(&self, wanted_lower: &str) -> bool {
        self.category.as_deref().unwrap_or_default().to_lowercase() == wanted_lower
    }
}

/// Wire shape before coercion
#[derive(Deserialize)]
struct RawCatalogItem {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    category: Value,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    spicy: Value,
    #[serde(default)]
    vegetarian: Value,
    #[serde(default)]
    available: Value,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawCatalogItem> for CatalogItem {
    type Error = String;

    fn try_from(raw: RawCatalogItem) -> Result<Self, Self::Error> {
        let id = coerce_id(&raw.id).ok_or_else(|| format!("unusable id {}", raw.id))?;

        Ok(Self {
            id,
            name: coerce_text(raw.name),
            description: coerce_text(raw.description),
            category: coerce_text(raw.category),
            price: coerce_price(&raw.price),
            spicy: Some(raw.spicy).filter(|v| !v.is_null()),
            vegetarian: coerce_truthy(&raw.vegetarian),
            available: coerce_truthy(&raw.available),
            extra: raw.extra,
        })
    }
}

fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

fn coerce_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_price(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    }
}

fn coerce_truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}
