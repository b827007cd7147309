//! # Validation Module
//!
//! Input validation for mutating store operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (excluded)                                  │
//! │  ├── Basic format checks (empty inputs, non-numeric text)          │
//! │  └── Immediate user feedback                                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field rules                                │
//! │  ├── name / category non-empty                                     │
//! │  ├── stock / amount non-negative integers                          │
//! │  └── price non-negative and finite                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store invariants (stocklens-store)                       │
//! │  └── case-insensitive name uniqueness (needs the full inventory)   │
//! │                                                                     │
//! │  Any failure at layer 2 or 3 means NO mutation happened.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a product name.
///
/// Must be non-empty after trimming. Returns the trimmed name.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    Ok(name.to_string())
}

/// Validates a category label.
///
/// Must be non-empty after trimming. Returns the trimmed label.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::Required { field: "category" });
    }
    Ok(category.to_string())
}

/// Validates an initial stock level: zero or greater.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative { field: "stock" });
    }
    Ok(())
}

/// Validates a unit price: finite and zero or greater.
///
/// Zero is allowed (free items). NaN and infinities are rejected up front so
/// the numeric sort never sees an incomparable value.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite { field: "price" });
    }
    if price < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }
    Ok(())
}

/// Validates a stock-adjustment amount: zero or greater.
///
/// The subtract clamp handles amounts larger than the current stock; the only
/// invalid amount is a negative one.
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::Negative { field: "amount" });
    }
    Ok(())
}
