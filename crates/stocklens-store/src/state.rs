//! # Shared Store State
//!
//! The handle a presentation layer holds on the inventory store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The UI thread and the debounce timer both need access
//! 2. Only one caller may mutate the store at a time
//! 3. Every operation runs to completion under the lock, so the
//!    filter → sort → recompute sequence is never observed half-done
//!
//! ## Why Not RwLock?
//! Store operations are quick and most of them mutate state. A RwLock would
//! add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::error::LoadError;
use crate::source;
use crate::store::InventoryStore;

/// Shared, clonable handle to the inventory store.
///
/// Clones share the same underlying store; this is what the debouncer's
/// scheduled closure captures.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    inner: Arc<Mutex<InventoryStore>>,
}

impl StoreState {
    /// Creates a handle around an empty, not-yet-loaded store.
    pub fn new() -> Self {
        StoreState {
            inner: Arc::new(Mutex::new(InventoryStore::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stats = state.with_store(|store| store.statistics());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        let store = self.inner.lock().expect("inventory store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.adjust_stock(id, op, amount))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        let mut store = self.inner.lock().expect("inventory store mutex poisoned");
        f(&mut store)
    }

    /// Populates the store from a JSON dataset file.
    ///
    /// This is the initial async boundary: until it resolves the store holds
    /// no data. On any failure (unreachable file, malformed body, empty
    /// dataset) the store ends up empty and marked failed, never partially
    /// populated.
    pub async fn populate_from_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), LoadError> {
        match source::load_json_file(path).await {
            Ok(records) => self.with_store_mut(|store| store.load(records)),
            Err(err) => {
                self.with_store_mut(|store| store.fail_load());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadPhase;
    use stocklens_core::Product;

    #[test]
    fn test_clones_share_the_store() {
        let state = StoreState::new();
        let alias = state.clone();

        state.with_store_mut(|store| {
            store
                .load(vec![Product {
                    id: 1,
                    name: "Widget".to_string(),
                    category: "Tools".to_string(),
                    stock: 3,
                    price: 9.99,
                }])
                .unwrap();
        });

        assert_eq!(alias.with_store(|store| store.inventory().len()), 1);
    }

    #[tokio::test]
    async fn test_populate_from_missing_file_marks_failed() {
        let state = StoreState::new();
        let err = state
            .populate_from_file("/definitely/not/a/real/path.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert_eq!(state.with_store(|s| s.phase()), LoadPhase::Failed);
    }
}
