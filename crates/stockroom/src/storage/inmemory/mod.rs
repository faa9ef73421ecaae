mod repository;

pub use repository::InMemoryItemStore;
