//! # Store Error Types
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  LoadError          - dataset unreachable, malformed, or empty      │
//! │  │                    FATAL to population: store stays empty and    │
//! │  │                    marked Failed, never partially filled         │
//! │  │                                                                  │
//! │  StoreError                                                         │
//! │  ├── NotLoaded        - operation before a successful load          │
//! │  ├── ProductNotFound  - unknown id, recoverable no-op               │
//! │  ├── Validation       - bad input, recoverable no-op                │
//! │  └── Load             - wraps LoadError                             │
//! │                                                                     │
//! │  Every variant renders a human-readable message; nothing is         │
//! │  swallowed silently and nothing panics.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

pub use stocklens_core::ValidationError;

/// Failures while populating the store from the external source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data source could not be read.
    #[error("failed to read inventory data: {0}")]
    Io(#[from] std::io::Error),

    /// The data source did not contain a valid product list.
    #[error("inventory data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The data source contained no products, so the next-id watermark
    /// would be undefined.
    #[error("inventory data contains no products")]
    EmptyDataset,
}

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has no data yet (load pending or failed).
    #[error("inventory has not been loaded")]
    NotLoaded,

    /// The referenced product does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(u64),

    /// Input validation failed; nothing was mutated.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Initial population failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::ProductNotFound(7).to_string(),
            "product not found: 7"
        );
        assert_eq!(
            StoreError::Load(LoadError::EmptyDataset).to_string(),
            "inventory data contains no products"
        );
        assert_eq!(
            StoreError::Validation(ValidationError::Required { field: "name" }).to_string(),
            "name is required"
        );
    }
}
