//! # Inventory Store
//!
//! The authoritative product collection and its derived view.
//!
//! ## Recompute Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Inventory Store Data Flow                           │
//! │                                                                     │
//! │   load / adjust_stock / create_product                             │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   inventory: Vec<Product>      (authoritative, mutated in place)    │
//! │        │                                                            │
//! │        ▼  filter(search_term, category)                             │
//! │   candidates ⊆ inventory                                            │
//! │        │                                                            │
//! │        ▼  sort(current column, current direction)                   │
//! │   view: Vec<Product>           (derived, rebuilt from scratch)      │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   statistics() / report / rendering collaborator                    │
//! │                                                                     │
//! │  INVARIANTS:                                                        │
//! │  • view is always a subset/reordering of inventory                  │
//! │  • view is never patched incrementally                              │
//! │  • next_id > every existing id                                      │
//! │  • stock never goes negative (subtract clamps at zero)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use stocklens_core::{
    validation, Product, SortColumn, SortState, Statistics, StockOp, ValidationError,
};

use crate::error::{LoadError, StoreError, StoreResult};

// =============================================================================
// Load Phase
// =============================================================================

/// Population state of the store.
///
/// All mutating operations require `Ready`. A failed load leaves the store
/// empty and `Failed` - clearly failed, never partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// No load attempted yet (or load still in flight).
    Empty,
    /// Dataset loaded, store operational.
    Ready,
    /// Load failed; store holds no data.
    Failed,
}

// =============================================================================
// New Product Input
// =============================================================================

/// Fields for creating a product. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
}

// =============================================================================
// Inventory Store
// =============================================================================

/// The inventory store: authoritative dataset plus derived view state.
///
/// Single owner, no ambient globals. A presentation layer holds one of these
/// (usually behind [`crate::state::StoreState`]) and calls back into it on
/// user actions; after every mutation the view has already been recomputed
/// and can be re-read.
#[derive(Debug)]
pub struct InventoryStore {
    /// Authoritative collection. Mutated in place, never deleted from.
    inventory: Vec<Product>,

    /// Derived projection: filtered and sorted copy of `inventory`,
    /// rebuilt from scratch on every relevant change.
    view: Vec<Product>,

    /// Distinct categories across `inventory`, sorted lexicographically.
    categories: Vec<String>,

    /// Next identifier to assign. Invariant: > every existing id.
    next_id: u64,

    /// Active search term, trimmed and lowercased. Empty = no constraint.
    search_term: String,

    /// Active category selection. Empty = all categories.
    category_filter: String,

    /// Active (column, direction) pair.
    sort: SortState,

    phase: LoadPhase,
}

impl InventoryStore {
    /// Creates an empty, not-yet-loaded store.
    pub fn new() -> Self {
        InventoryStore {
            inventory: Vec::new(),
            view: Vec::new(),
            categories: Vec::new(),
            next_id: 1,
            search_term: String::new(),
            category_filter: String::new(),
            sort: SortState::default(),
            phase: LoadPhase::Empty,
        }
    }

    // =========================================================================
    // Population
    // =========================================================================

    /// Replaces the inventory with `records` and recomputes everything
    /// derived from it (next id, category set, view).
    ///
    /// Fails with [`LoadError::EmptyDataset`] when `records` is empty: the
    /// next-id watermark is `max(id) + 1`, which is undefined over nothing.
    /// On failure the store is left empty and marked [`LoadPhase::Failed`].
    pub fn load(&mut self, records: Vec<Product>) -> Result<(), LoadError> {
        if records.is_empty() {
            warn!("load rejected: empty dataset");
            self.fail_load();
            return Err(LoadError::EmptyDataset);
        }

        // max() is safe here: the empty case was rejected above.
        let max_id = records.iter().map(|p| p.id).max().unwrap_or(0);

        self.inventory = records;
        self.next_id = max_id + 1;
        self.phase = LoadPhase::Ready;
        self.rebuild_categories();
        self.refresh_view();

        info!(
            products = self.inventory.len(),
            next_id = self.next_id,
            categories = self.categories.len(),
            "inventory loaded"
        );
        Ok(())
    }

    /// Marks the store as failed after an unsuccessful source fetch.
    ///
    /// Clears any previous contents so the store is never left partially
    /// populated. Called by the loading path when the external source is
    /// unreachable or malformed.
    pub fn fail_load(&mut self) {
        self.inventory.clear();
        self.view.clear();
        self.categories.clear();
        self.next_id = 1;
        self.phase = LoadPhase::Failed;
    }

    /// Current population state.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    fn ensure_ready(&self) -> StoreResult<()> {
        if self.phase == LoadPhase::Ready {
            Ok(())
        } else {
            Err(StoreError::NotLoaded)
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adjusts the stock of a product and recomputes the view.
    ///
    /// ## Behavior
    /// - `Add`: stock + amount
    /// - `Subtract`: max(0, stock - amount) - clamped silently, a clamp is
    ///   a success
    /// - `Set`: amount
    ///
    /// The amount is validated before any lookup, so an invalid amount never
    /// mutates anything. Returns the new stock level.
    pub fn adjust_stock(&mut self, product_id: u64, op: StockOp, amount: i64) -> StoreResult<i64> {
        self.ensure_ready()?;
        validation::validate_amount(amount)?;

        let product = self
            .inventory
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;

        let new_stock = op.apply(product.stock, amount);
        debug!(
            product_id,
            ?op,
            amount,
            old_stock = product.stock,
            new_stock,
            "adjusting stock"
        );
        product.stock = new_stock;

        self.refresh_view();
        Ok(new_stock)
    }

    /// Creates a product and recomputes the category set and the view.
    ///
    /// ## Validation Order
    /// name non-empty → category non-empty → stock ≥ 0 → price finite, ≥ 0 →
    /// name unused (case-insensitive). The first violated rule is reported
    /// and nothing is mutated.
    ///
    /// Returns a clone of the created product, including its assigned id.
    pub fn create_product(&mut self, input: NewProduct) -> StoreResult<Product> {
        self.ensure_ready()?;

        let name = validation::validate_name(&input.name)?;
        let category = validation::validate_category(&input.category)?;
        validation::validate_stock(input.stock)?;
        validation::validate_price(input.price)?;

        let lowered = name.to_lowercase();
        if self
            .inventory
            .iter()
            .any(|p| p.name.to_lowercase() == lowered)
        {
            return Err(ValidationError::DuplicateName { name }.into());
        }

        let product = Product {
            id: self.next_id,
            name,
            category,
            stock: input.stock,
            price: input.price,
        };
        self.next_id += 1;
        self.inventory.push(product.clone());

        self.rebuild_categories();
        self.refresh_view();

        info!(id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    // =========================================================================
    // View Recomputation
    // =========================================================================

    /// Sets the active search term and category, then recomputes the view.
    ///
    /// The search term is trimmed and lowercased once here; matching is
    /// case-insensitive substring against name, id-as-string, or category.
    /// The category must match exactly (it comes from the category set).
    /// The current sort is re-applied without toggling, so filtering never
    /// flips the order. Idempotent.
    pub fn filter(&mut self, search_term: &str, category: &str) {
        self.search_term = search_term.trim().to_lowercase();
        self.category_filter = category.to_string();
        self.refresh_view();
        debug!(
            search = %self.search_term,
            category = %self.category_filter,
            matches = self.view.len(),
            "view filtered"
        );
    }

    /// Sorts the view by `column`.
    ///
    /// With `toggle` (explicit user action on a header): selecting the
    /// current column flips the direction, selecting another column adopts
    /// it ascending. Without `toggle` (internal re-sort): the current
    /// column/direction are reused unconditionally.
    pub fn sort(&mut self, column: SortColumn, toggle: bool) {
        self.sort.select(column, toggle);
        self.resort_view();
    }

    /// Clears search and category and resets the sort to id ascending.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.category_filter.clear();
        self.sort = SortState::default();
        self.refresh_view();
    }

    /// Rebuilds the view from the authoritative inventory: filter by the
    /// active predicate, then re-apply the current sort.
    fn refresh_view(&mut self) {
        self.view = self
            .inventory
            .iter()
            .filter(|p| {
                p.matches_search(&self.search_term) && p.matches_category(&self.category_filter)
            })
            .cloned()
            .collect();
        self.resort_view();
    }

    /// Stable sort keeps insertion order as the tie-break.
    fn resort_view(&mut self) {
        let sort = self.sort;
        self.view.sort_by(|a, b| sort.compare(a, b));
    }

    fn rebuild_categories(&mut self) {
        // BTreeSet gives distinctness and lexicographic order in one go.
        let set: BTreeSet<&str> = self.inventory.iter().map(|p| p.category.as_str()).collect();
        self.categories = set.into_iter().map(String::from).collect();
    }

    // =========================================================================
    // Read Access (for rendering and export collaborators)
    // =========================================================================

    /// The current view: filtered and sorted products, in display order.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// The authoritative inventory, in insertion order.
    pub fn inventory(&self) -> &[Product] {
        &self.inventory
    }

    /// Statistics over the **view**, so filtering narrows the displayed
    /// numbers along with the table.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.view)
    }

    /// Distinct categories across the inventory, sorted lexicographically.
    /// Populates the category selector and the create-product form.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The active search term (normalized form).
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active category selection (empty = all).
    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    /// The active sort state.
    pub fn sort_state(&self) -> SortState {
        self.sort
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
