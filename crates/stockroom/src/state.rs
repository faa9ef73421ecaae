//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The item store is held behind a repository trait
//! object so handlers never touch the backing collection directly.

use std::sync::Arc;

use stockroom_core::store::ItemRepository;

use crate::{seed_data::seed_items, storage::InMemoryItemStore};

/// Shared application state.
///
/// This is cloned for each request handler and contains the item
/// repository trait object.
#[derive(Clone)]
pub struct AppState {
    /// Item repository backing the CRUD endpoints.
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a new AppState over the given repository.
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    /// Creates an AppState backed by an in-memory store seeded with the
    /// demo catalog. Used at process start and by endpoint tests, which
    /// each get a fresh store.
    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(InMemoryItemStore::with_items(seed_items())))
    }
}
