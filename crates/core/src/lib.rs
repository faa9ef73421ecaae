//! Core domain types and storage abstractions for the stockroom project.

pub mod item;
pub mod store;
