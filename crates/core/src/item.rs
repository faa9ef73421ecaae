//! The `Item` domain type.

use serde::{Deserialize, Serialize};

fn default_in_stock() -> bool {
    true
}

/// A sellable product record.
///
/// `id` is `None` until the item is inserted into a store, which assigns
/// one. Create and update payloads reuse this type; any client-supplied
/// `id` is ignored by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Stock flag, defaults to true when omitted from a payload.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Item {
    /// Create a new item without an id.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            in_stock: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the id. Used when building seed data.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Mark the item as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}
