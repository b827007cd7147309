//! # Statistics
//!
//! Derived, read-only numbers for the dashboard cards.
//!
//! Statistics are computed over whatever slice the caller passes. The store
//! passes its **view**, not the full inventory, so filtering narrows the
//! displayed numbers along with the table.

use serde::Serialize;

use crate::types::Product;

/// Snapshot of the headline numbers for a set of products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of products in the set.
    pub total_products: usize,

    /// Sum of stock across the set.
    pub total_stock: i64,

    /// Products with stock below the low-stock threshold.
    pub low_stock_count: usize,

    /// Sum of stock × price across the set.
    pub total_value: f64,
}

impl Statistics {
    /// Computes statistics over a set of products in one pass.
    pub fn compute(products: &[Product]) -> Self {
        let mut stats = Statistics {
            total_products: products.len(),
            total_stock: 0,
            low_stock_count: 0,
            total_value: 0.0,
        };
        for product in products {
            stats.total_stock += product.stock;
            if product.is_low_stock() {
                stats.low_stock_count += 1;
            }
            stats.total_value += product.total_value();
        }
        stats
    }
}
