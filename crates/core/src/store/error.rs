use thiserror::Error;

/// Errors that can occur during item store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item not found: {id}")]
    NotFound { id: u64 },
}

/// Result type for item store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
