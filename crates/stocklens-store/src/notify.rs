//! # Operation Notices
//!
//! The success/failure signal a presentation layer surfaces as a transient
//! toast after each mutating operation.
//!
//! ## Notice Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Notice Flow                                     │
//! │                                                                     │
//! │  store.adjust_stock(...)  ──►  Result<i64, StoreError>              │
//! │                                       │                             │
//! │                                       ▼                             │
//! │                              Notice::from the outcome               │
//! │                                       │                             │
//! │                                       ▼                             │
//! │  { "severity": "success", "message": "Stock updated. New           │
//! │    stock: 8" }  ──► rendered as a toast (outside this crate)        │
//! │                                                                     │
//! │  Every StoreError renders a human-readable message; no failure      │
//! │  is silently swallowed.                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use stocklens_core::Product;

use crate::error::StoreError;

/// How a notice should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A human-readable outcome for one mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Notice for a completed stock adjustment.
    pub fn stock_updated(new_stock: i64) -> Self {
        Notice::success(format!("Stock updated. New stock: {}", new_stock))
    }

    /// Notice for a newly created product.
    pub fn product_created(product: &Product) -> Self {
        Notice::success(format!(
            "Product \"{}\" created with id {}",
            product.name, product.id
        ))
    }

    /// Notice for a failed initial load.
    pub fn load_failed() -> Self {
        Notice::error("Failed to load inventory data. Please try again.")
    }
}

impl From<&StoreError> for Notice {
    fn from(err: &StoreError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Collapses a mutating operation's result into a notice, mapping the
/// success value through `on_success`.
pub fn outcome<T>(result: &Result<T, StoreError>, on_success: impl FnOnce(&T) -> Notice) -> Notice {
    match result {
        Ok(value) => on_success(value),
        Err(err) => Notice::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_core::ValidationError;

    #[test]
    fn test_success_notices() {
        let notice = Notice::stock_updated(8);
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Stock updated. New stock: 8");
    }

    #[test]
    fn test_error_notice_carries_the_specific_rule() {
        let err = StoreError::Validation(ValidationError::DuplicateName {
            name: "Widget".to_string(),
        });
        let notice = Notice::from(&err);
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "a product named 'Widget' already exists");
    }

    #[test]
    fn test_outcome_helper() {
        let ok: Result<i64, StoreError> = Ok(5);
        assert_eq!(
            outcome(&ok, |stock| Notice::stock_updated(*stock)).severity,
            Severity::Success
        );

        let err: Result<i64, StoreError> = Err(StoreError::ProductNotFound(3));
        let notice = outcome(&err, |stock| Notice::stock_updated(*stock));
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "product not found: 3");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_string(&Notice::stock_updated(0)).unwrap();
        assert_eq!(
            json,
            r#"{"severity":"success","message":"Stock updated. New stock: 0"}"#
        );
    }
}
