//! Menu resource manager
//!
//! `MenuStore` owns the authoritative ordered collection of menu items and
//! enforces the validation and id-assignment rules on every mutation. The
//! collection lives behind a single writer lock; each operation is one
//! atomic step, so concurrent mutations cannot produce duplicate ids or
//! lost updates.

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::types::{MenuItem, MenuItemDraft, MenuItemId};

pub mod seed;
pub mod validate;

pub use validate::ValidMenuItem;

/// In-memory menu store. Construct with the seed data it should start
/// from; there is no process-global state.
pub struct MenuStore {
    items: RwLock<Vec<MenuItem>>,
}

impl MenuStore {
    pub fn new(seed: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }

    /// Return the full collection in insertion order.
    pub async fn list(&self) -> Vec<MenuItem> {
        self.items.read().await.clone()
    }

    /// Fetch a single item by exact id equality.
    pub async fn get(&self, id: MenuItemId) -> Result<MenuItem> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Validate the draft, assign the next id (max existing + 1, or 1 on
    /// an empty collection), default `available` to true, and append.
    pub async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem> {
        let valid = draft.validate().map_err(Error::Validation)?;

        let mut items = self.items.write().await;
        let id = items.iter().map(|item| item.id).max().map_or(1, |m| m + 1);

        let item = MenuItem {
            id,
            name: valid.name,
            description: valid.description,
            price: valid.price,
            category: valid.category,
            ingredients: valid.ingredients,
            available: valid.available.unwrap_or(true),
        };

        items.push(item.clone());
        tracing::info!(id, name = %item.name, "Created menu item");
        Ok(item)
    }

    /// Replace the stored item's fields with the draft's. Validation runs
    /// before the lookup so a failing draft leaves the store untouched;
    /// the id comes from the path, never from the payload. An absent
    /// `available` keeps the stored value.
    pub async fn update(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<MenuItem> {
        let valid = draft.validate().map_err(Error::Validation)?;

        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::not_found(id))?;

        item.name = valid.name;
        item.description = valid.description;
        item.price = valid.price;
        item.category = valid.category;
        item.ingredients = valid.ingredients;
        if let Some(available) = valid.available {
            item.available = available;
        }

        tracing::info!(id, name = %item.name, "Updated menu item");
        Ok(item.clone())
    }

    /// Remove exactly one item by id and return it. Remaining ids are
    /// never renumbered.
    pub async fn delete(&self, id: MenuItemId) -> Result<MenuItem> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::not_found(id))?;

        let item = items.remove(index);
        tracing::info!(id, name = %item.name, "Deleted menu item");
        Ok(item)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use serde_json::json;

    fn garlic_bread() -> MenuItemDraft {
        MenuItemDraft {
            name: Some(json!("Garlic Bread")),
            description: Some(json!("Toasted bread with garlic butter")),
            price: Some(json!(4.50)),
            category: Some(json!("appetizer")),
            ingredients: Some(json!(["bread", "garlic", "butter"])),
            available: None,
        }
    }

    #[tokio::test]
    async fn create_on_empty_store_assigns_id_one() {
        let store = MenuStore::new(vec![]);
        let item = store.create(garlic_bread()).await.unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Garlic Bread");
        assert_eq!(item.category, Category::Appetizer);
        assert!(item.available, "available must default to true");
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one_after_gaps() {
        let store = MenuStore::new(seed::default_seed());
        store.delete(6).await.unwrap();
        store.delete(2).await.unwrap();

        // Max surviving id is 5, so the next id is 6 again.
        let item = store.create(garlic_bread()).await.unwrap();
        assert_eq!(item.id, 6);
    }

    #[tokio::test]
    async fn invalid_create_leaves_store_unchanged() {
        let store = MenuStore::new(seed::default_seed());
        let before = store.list().await;

        let err = store.create(MenuItemDraft::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.len() == 5));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn update_preserves_id_and_replaces_fields() {
        let store = MenuStore::new(seed::default_seed());
        let updated = store.update(3, garlic_bread()).await.unwrap();

        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Garlic Bread");
        // Mozzarella Sticks were available; draft omits `available`.
        assert!(updated.available);
        assert_eq!(store.get(3).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn invalid_update_leaves_item_unchanged() {
        let store = MenuStore::new(seed::default_seed());
        let before = store.get(1).await.unwrap();

        let draft = MenuItemDraft {
            name: Some(json!("ab")),
            ..garlic_bread()
        };
        let err = store.update(1, draft).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.get(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn missing_ids_yield_not_found() {
        let store = MenuStore::new(seed::default_seed());

        assert!(matches!(store.get(999).await, Err(Error::NotFound(_))));
        assert!(matches!(
            store.update(999, garlic_bread()).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.delete(999).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_is_terminal() {
        let store = MenuStore::new(seed::default_seed());
        let deleted = store.delete(4).await.unwrap();
        assert_eq!(deleted.id, 4);

        assert!(matches!(store.get(4).await, Err(Error::NotFound(_))));
        assert!(matches!(store.delete(4).await, Err(Error::NotFound(_))));
        assert_eq!(store.len().await, 5);

        // Surviving ids keep their numbers.
        let ids: Vec<_> = store.list().await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6]);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MenuStore::new(vec![]);
        let created = store.create(garlic_bread()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }
}
