//! In-memory item store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stockroom_core::item::Item;
use stockroom_core::store::{ItemRepository, Result, StoreError};

/// In-memory storage backend.
///
/// Items live in a `Vec` wrapped in `Arc<RwLock<_>>`, which keeps
/// insertion order observable through `list_items` and makes every
/// operation a single critical section. Data is not persisted and will
/// be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given items.
    ///
    /// Callers must pass items that already carry unique ids.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemStore {
    async fn list_items(&self, in_stock: Option<bool>) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| in_stock.is_none_or(|flag| item.in_stock == flag))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: u64) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == Some(id)).cloned())
    }

    async fn create_item(&self, mut item: Item) -> Result<Item> {
        let mut items = self.items.write().await;

        // Next id is max(existing) + 1, so deleting the highest id makes
        // that id available again.
        let next_id = items.iter().filter_map(|item| item.id).max().unwrap_or(0) + 1;
        item.id = Some(next_id);

        items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: u64, mut replacement: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        let idx = items
            .iter()
            .position(|item| item.id == Some(id))
            .ok_or(StoreError::NotFound { id })?;

        replacement.id = Some(id);
        items[idx] = replacement.clone();
        Ok(replacement)
    }

    async fn delete_item(&self, id: u64) -> Result<()> {
        let mut items = self.items.write().await;
        let idx = items
            .iter()
            .position(|item| item.id == Some(id))
            .ok_or(StoreError::NotFound { id })?;

        items.remove(idx);
        Ok(())
    }
}
