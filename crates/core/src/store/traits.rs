use async_trait::async_trait;

use crate::item::Item;

use super::Result;

/// Repository for item store operations.
///
/// Implementations own an ordered sequence of items and must apply each
/// operation as a single indivisible step relative to the others.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets all items in insertion order, optionally filtered by stock flag.
    async fn list_items(&self, in_stock: Option<bool>) -> Result<Vec<Item>>;

    /// Gets an item by its id.
    async fn get_item(&self, id: u64) -> Result<Option<Item>>;

    /// Inserts a new item at the end of the store.
    ///
    /// Any id carried by `item` is ignored; the store assigns the next id
    /// and returns the stored item with it.
    async fn create_item(&self, item: Item) -> Result<Item>;

    /// Replaces the item with the given id wholesale, preserving its
    /// position. The replacement's id is forced to `id`.
    async fn update_item(&self, id: u64, replacement: Item) -> Result<Item>;

    /// Deletes an item by its id.
    async fn delete_item(&self, id: u64) -> Result<()>;
}
