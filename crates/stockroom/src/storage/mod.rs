mod inmemory;

pub use inmemory::InMemoryItemStore;
