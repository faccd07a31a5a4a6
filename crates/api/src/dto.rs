//! Request DTOs and their mapping into domain input types.

use serde::Deserialize;
use serde_json::Value;

use stockroom_inventory::{ItemDraft, ItemFilter};

/// JSON create body. Fields arrive loosely typed so that both
/// `{"quantity": 10}` and `{"quantity": "10"}` reach the validation layer,
/// which owns coercion.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<Value>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
    pub category: Option<Value>,
}

impl CreateItemRequest {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: raw_text(self.name),
            quantity: raw_text(self.quantity),
            price: raw_text(self.price),
            category: raw_text(self.category),
        }
    }
}

/// Form-encoded item body (create via /manage_items, update via /items/{id}).
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

impl ItemForm {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn into_filter(self) -> ItemFilter {
        ItemFilter {
            category: non_empty(self.category),
            search: non_empty(self.search),
        }
    }
}

/// Report query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

impl ReportQuery {
    /// Lowercased format, defaulting to html.
    pub fn format(&self) -> String {
        match non_empty(self.format.clone()) {
            Some(f) => f.to_lowercase(),
            None => "html".to_string(),
        }
    }
}

fn raw_text(value: Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        // Numbers (and anything else) keep their JSON text form; the
        // validation layer decides whether it parses.
        Some(other) => Some(other.to_string()),
    }
}

/// Empty query parameters (`?category=`) mean "no filter", not "match empty".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
