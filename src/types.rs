//! Core types for carta

use serde::{Deserialize, Serialize};

/// Menu item ID type
pub type MenuItemId = u64;

/// Menu category. Serialized lowercase; draft payloads carry the raw
/// string so an unknown category becomes a validation violation instead
/// of a deserialization failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "appetizer" => Some(Category::Appetizer),
            "entree" => Some(Category::Entree),
            "dessert" => Some(Category::Dessert),
            "beverage" => Some(Category::Beverage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored menu item. Every item in the collection satisfies the
/// validation constraints enforced on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Client payload for create and update. Fields are raw JSON values so
/// that missing and wrong-typed fields alike surface as collected
/// violations instead of serde rejections; only malformed JSON is left to
/// the routing layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemDraft {
    pub name: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
    pub category: Option<serde_json::Value>,
    pub ingredients: Option<serde_json::Value>,
    pub available: Option<serde_json::Value>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
