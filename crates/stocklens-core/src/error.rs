//! # Error Types
//!
//! Validation errors for stocklens-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements. A failed
/// validation is always a no-op on the store: the caller receives the
/// specific rule that was violated and nothing is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Numeric value must be zero or greater.
    #[error("{field} must be zero or greater")]
    Negative { field: &'static str },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A product with this name already exists (case-insensitive match).
    #[error("a product named '{name}' already exists")]
    DuplicateName { name: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
