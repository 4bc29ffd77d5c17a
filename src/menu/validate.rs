//! Draft validation
//!
//! Validation collects every violation before failing so the error
//! response always enumerates all invalid fields with their messages.
//! Drafts carry raw JSON values, so a missing field and a wrong-typed
//! field produce the same field-level violation.

use serde_json::Value;

use crate::types::{Category, MenuItemDraft, Violation};

/// A draft whose fields all passed validation. `available` stays optional
/// here: create defaults it to true, update keeps the stored value.
#[derive(Debug, Clone)]
pub struct ValidMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: Option<bool>,
}

impl MenuItemDraft {
    /// Validate the draft, returning either the validated fields or the
    /// full list of violations.
    pub fn validate(self) -> Result<ValidMenuItem, Vec<Violation>> {
        let mut violations = Vec::new();

        let name = string_of_len(self.name.as_ref(), 3);
        if name.is_none() {
            violations.push(Violation::new(
                "name",
                "Name must be at least 3 characters",
            ));
        }

        let description = string_of_len(self.description.as_ref(), 10);
        if description.is_none() {
            violations.push(Violation::new(
                "description",
                "Description must be at least 10 characters",
            ));
        }

        let price = self
            .price
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|price| *price > 0.0);
        if price.is_none() {
            violations.push(Violation::new("price", "Price must be greater than 0"));
        }

        let category = self
            .category
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Category::parse);
        if category.is_none() {
            violations.push(Violation::new("category", "Invalid category"));
        }

        let ingredients = string_list(self.ingredients.as_ref());
        if ingredients.is_none() {
            violations.push(Violation::new(
                "ingredients",
                "Ingredients must include at least one item",
            ));
        }

        let available = match self.available.as_ref() {
            None => Some(None),
            Some(Value::Bool(b)) => Some(Some(*b)),
            Some(_) => {
                violations.push(Violation::new(
                    "available",
                    "Available must be true or false",
                ));
                None
            }
        };

        match (name, description, price, category, ingredients, available) {
            (
                Some(name),
                Some(description),
                Some(price),
                Some(category),
                Some(ingredients),
                Some(available),
            ) if violations.is_empty() => Ok(ValidMenuItem {
                name,
                description,
                price,
                category,
                ingredients,
                available,
            }),
            _ => Err(violations),
        }
    }
}

fn string_of_len(value: Option<&Value>, min_chars: usize) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| s.chars().count() >= min_chars)
        .map(str::to_string)
}

/// A non-empty array whose elements are all strings.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let list = value?.as_array()?;
    if list.is_empty() {
        return None;
    }
    list.iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
