//! # Domain Types
//!
//! Core domain types used throughout Stocklens.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │   SortState     │   │    StockOp      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (u64)       │   │  column         │   │  Add            │   │
//! │  │  name           │   │  direction      │   │  Subtract       │   │
//! │  │  category       │   │  toggle rules   │   │  Set            │   │
//! │  │  stock, price   │   └─────────────────┘   └─────────────────┘   │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Product identifiers are small sequential integers assigned by the store
//! (`max(existing) + 1`), not UUIDs: the dataset lives in one process, is
//! never merged with another device's data, and the ids double as the
//! user-visible row numbers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A product in the inventory.
///
/// This is also the wire shape of the dataset file: a JSON array of
/// `{id, name, category, stock, price}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned monotonically by the store.
    pub id: u64,

    /// Display name, unique case-insensitively across the inventory.
    pub name: String,

    /// Category label, also the grouping key for report rollups.
    pub category: String,

    /// Current stock level. Invariant: never negative.
    pub stock: i64,

    /// Unit price. Invariant: non-negative and finite.
    pub price: f64,
}

impl Product {
    /// Whether this product is flagged by the low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Stock on hand valued at the current unit price.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.stock as f64 * self.price
    }

    /// Case-insensitive search match against name, id-as-string, or category.
    ///
    /// `term` must already be trimmed and lowercased (the store normalizes
    /// once per filter pass, not once per product). An empty term matches
    /// everything.
    pub fn matches_search(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.id.to_string().contains(term)
            || self.category.to_lowercase().contains(term)
    }

    /// Exact category match. An empty selection matches everything.
    pub fn matches_category(&self, category: &str) -> bool {
        category.is_empty() || self.category == category
    }
}

// =============================================================================
// Stock Operations
// =============================================================================

/// How a stock adjustment is applied to the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockOp {
    /// New stock = current + amount.
    Add,
    /// New stock = max(0, current - amount). Clamped, never negative.
    Subtract,
    /// New stock = amount.
    Set,
}

impl StockOp {
    /// Applies the operation to a current stock level.
    ///
    /// `amount` must already be validated as non-negative; the clamp on
    /// `Subtract` is the only place a would-be-negative result can arise,
    /// and it is deliberately a silent success rather than an error.
    pub fn apply(self, current: i64, amount: i64) -> i64 {
        match self {
            StockOp::Add => current + amount,
            StockOp::Subtract => (current - amount).max(0),
            StockOp::Set => amount,
        }
    }
}

// =============================================================================
// Sort State
// =============================================================================

/// Column the view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Name,
    Category,
    Stock,
    Price,
}

impl SortColumn {
    /// Compares two products on this column.
    ///
    /// Numeric columns (id, stock, price) compare as floating point; string
    /// columns compare case-insensitively. Incomparable floats (NaN, which
    /// validation keeps out of the dataset anyway) tie as Equal, so a stable
    /// sort preserves insertion order for them.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortColumn::Id => (a.id as f64)
                .partial_cmp(&(b.id as f64))
                .unwrap_or(Ordering::Equal),
            SortColumn::Stock => (a.stock as f64)
                .partial_cmp(&(b.stock as f64))
                .unwrap_or(Ordering::Equal),
            SortColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        }
    }
}

/// Direction the view is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison result to this direction.
    #[inline]
    pub fn orient(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// The (column, direction) pair the view is currently sorted by.
///
/// ## Toggle Rules
/// ```text
/// select(column, toggle=true),  same column   → flip direction
/// select(column, toggle=true),  other column  → adopt column, ascending
/// select(column, toggle=false)                → keep column + direction
/// ```
/// The non-toggle form exists for implicit re-sorts after a filter change:
/// filtering preserves the current order, it never flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Applies a column selection per the toggle rules above.
    pub fn select(&mut self, column: SortColumn, toggle: bool) {
        if toggle {
            if self.column == column {
                self.direction = self.direction.flipped();
            } else {
                self.direction = SortDirection::Ascending;
            }
            self.column = column;
        }
    }

    /// Comparator for two products under this sort state.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.direction.orient(self.column.compare(a, b))
    }
}

impl Default for SortState {
    /// Fresh stores start sorted by id, ascending.
    fn default() -> Self {
        SortState {
            column: SortColumn::Id,
            direction: SortDirection::Ascending,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, category: &str, stock: i64, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            stock,
            price,
        }
    }

    #[test]
    fn test_search_matches_name_id_and_category() {
        let p = product(42, "Widget Pro", "Tools", 3, 9.99);

        assert!(p.matches_search(""));
        assert!(p.matches_search("widget"));
        assert!(p.matches_search("42"));
        assert!(p.matches_search("4")); // substring of the id
        assert!(p.matches_search("tool"));
        assert!(!p.matches_search("gadget"));
    }

    #[test]
    fn test_category_match_is_exact() {
        let p = product(1, "Widget", "Tools", 3, 9.99);

        assert!(p.matches_category(""));
        assert!(p.matches_category("Tools"));
        // No case folding for the category selector: the selection comes
        // from the category set itself, never from free text.
        assert!(!p.matches_category("tools"));
    }

    #[test]
    fn test_stock_op_apply() {
        assert_eq!(StockOp::Add.apply(3, 5), 8);
        assert_eq!(StockOp::Subtract.apply(3, 2), 1);
        assert_eq!(StockOp::Subtract.apply(3, 100), 0); // clamped
        assert_eq!(StockOp::Set.apply(3, 7), 7);
        assert_eq!(StockOp::Set.apply(3, 0), 0);
    }

    #[test]
    fn test_sort_column_string_compare_is_case_insensitive() {
        let a = product(1, "apple", "Fruit", 1, 1.0);
        let b = product(2, "Banana", "Fruit", 1, 1.0);
        assert_eq!(SortColumn::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortColumn::Name.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_sort_column_numeric_compare() {
        let a = product(1, "A", "X", 10, 2.50);
        let b = product(2, "B", "X", 3, 19.99);
        assert_eq!(SortColumn::Stock.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortColumn::Price.compare(&a, &b), Ordering::Less);
        assert_eq!(SortColumn::Id.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_select_toggles_same_column() {
        let mut sort = SortState::default();
        sort.select(SortColumn::Price, true);
        assert_eq!(sort.column, SortColumn::Price);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.select(SortColumn::Price, true);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_select_new_column_resets_to_ascending() {
        let mut sort = SortState {
            column: SortColumn::Id,
            direction: SortDirection::Descending,
        };
        sort.select(SortColumn::Name, true);
        assert_eq!(sort.column, SortColumn::Name);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_select_without_toggle_keeps_state() {
        let mut sort = SortState {
            column: SortColumn::Price,
            direction: SortDirection::Descending,
        };
        sort.select(SortColumn::Name, false);
        assert_eq!(sort.column, SortColumn::Price);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{"id":1,"name":"Widget","category":"Tools","stock":3,"price":9.99}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Widget");
        assert_eq!(p.stock, 3);
        assert!((p.price - 9.99).abs() < f64::EPSILON);
    }
}
