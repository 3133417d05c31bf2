//! Item definition
//!
//! A single recorded expense.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single expense entry
///
/// Fields are private so an item cannot change after construction.
/// The `id` is generated once and only used for identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identity; records persisted without one get a fresh id
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,

    /// Free-text label
    name: String,

    /// Category label, conventionally "Personal" or "Business"
    #[serde(rename = "type")]
    category: String,

    /// Amount in the process-wide default currency
    price: f64,
}

impl Item {
    /// Create a new item with a fresh identifier
    ///
    /// No validation: empty names and zero or negative prices are stored as given.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Price as shown in a list row: shortest decimal form plus `$`
    ///
    /// `3.5` → `"3.5$"`, `12.0` → `"12$"`
    pub fn formatted_price(&self) -> String {
        format!("{}$", self.price)
    }
}
