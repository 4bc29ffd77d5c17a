//! Seed data
//!
//! The store starts from a seed list: either the built-in menu below or a
//! JSON file supplied through configuration. Seed files are verified the
//! same way client payloads are, so an invalid seed fails startup instead
//! of smuggling unvalidated items into the collection.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::{Category, MenuItem};

/// The built-in menu used when no seed file is configured.
pub fn default_seed() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Classic Burger".to_string(),
            description: "Beef patty with lettuce, tomato, and cheese on a sesame seed bun"
                .to_string(),
            price: 12.99,
            category: Category::Entree,
            ingredients: vec![
                "beef".to_string(),
                "lettuce".to_string(),
                "tomato".to_string(),
                "cheese".to_string(),
                "bun".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 2,
            name: "Chicken Caesar Salad".to_string(),
            description: "Grilled chicken breast over romaine lettuce with parmesan and croutons"
                .to_string(),
            price: 11.50,
            category: Category::Entree,
            ingredients: vec![
                "chicken".to_string(),
                "romaine lettuce".to_string(),
                "parmesan cheese".to_string(),
                "croutons".to_string(),
                "caesar dressing".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 3,
            name: "Mozzarella Sticks".to_string(),
            description: "Crispy breaded mozzarella served with marinara sauce".to_string(),
            price: 8.99,
            category: Category::Appetizer,
            ingredients: vec![
                "mozzarella cheese".to_string(),
                "breadcrumbs".to_string(),
                "marinara sauce".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 4,
            name: "Chocolate Lava Cake".to_string(),
            description: "Warm chocolate cake with molten center, served with vanilla ice cream"
                .to_string(),
            price: 7.99,
            category: Category::Dessert,
            ingredients: vec![
                "chocolate".to_string(),
                "flour".to_string(),
                "eggs".to_string(),
                "butter".to_string(),
                "vanilla ice cream".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 5,
            name: "Fresh Lemonade".to_string(),
            description: "House-made lemonade with fresh lemons and mint".to_string(),
            price: 3.99,
            category: Category::Beverage,
            ingredients: vec![
                "lemons".to_string(),
                "sugar".to_string(),
                "water".to_string(),
                "mint".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 6,
            name: "Fish and Chips".to_string(),
            description: "Beer-battered cod with seasoned fries and coleslaw".to_string(),
            price: 14.99,
            category: Category::Entree,
            ingredients: vec![
                "cod".to_string(),
                "beer batter".to_string(),
                "potatoes".to_string(),
                "coleslaw".to_string(),
                "tartar sauce".to_string(),
            ],
            available: false,
        },
    ]
}

/// Load a seed list from a JSON file and verify the collection invariants.
pub fn load_seed_file(path: &Path) -> Result<Vec<MenuItem>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let items: Vec<MenuItem> = serde_json::from_str(&data)
        .with_context(|| format!("invalid seed file {}", path.display()))?;

    verify_seed(&items)?;
    Ok(items)
}

/// Check the invariants every stored item must satisfy: unique positive
/// ids and the same field constraints applied to client payloads.
pub fn verify_seed(items: &[MenuItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id == 0 {
            bail!("seed item '{}' has id 0; ids must be positive", item.name);
        }
        if !seen.insert(item.id) {
            bail!("seed contains duplicate id {}", item.id);
        }
        if item.name.chars().count() < 3
            || item.description.chars().count() < 10
            || item.price <= 0.0
            || item.ingredients.is_empty()
        {
            bail!(
                "seed item {} ('{}') violates menu item constraints",
                item.id,
                item.name
            );
        }
    }
    Ok(())
}
