//! # stocklens-store: Inventory Store and View Pipeline
//!
//! Owns the authoritative product collection and the derived, displayed
//! view, plus everything around them: the async dataset load, the search
//! debouncer, operation notices and report assembly.
//!
//! ## Module Map
//!
//! - [`store`] - the [`store::InventoryStore`]: data, mutations, the
//!   filter → sort → recompute pipeline
//! - [`state`] - shared `Arc<Mutex<_>>` handle for a presentation layer
//! - [`source`] - async JSON dataset loading
//! - [`debounce`] - cancellable timer for search-as-you-type
//! - [`notify`] - success/failure notices for toasts
//! - [`report`] - report data assembly from the current view
//! - [`error`] - [`error::StoreError`] / [`error::LoadError`]
//!
//! ## Example
//!
//! ```rust
//! use stocklens_core::{SortColumn, StockOp, Product};
//! use stocklens_store::store::InventoryStore;
//!
//! let mut store = InventoryStore::new();
//! store.load(vec![
//!     Product { id: 1, name: "Widget".into(), category: "Tools".into(), stock: 3, price: 9.99 },
//!     Product { id: 2, name: "Gadget".into(), category: "Tools".into(), stock: 10, price: 19.99 },
//! ]).unwrap();
//!
//! store.filter("wid", "");
//! assert_eq!(store.view().len(), 1);
//!
//! store.adjust_stock(1, StockOp::Subtract, 100).unwrap();
//! assert_eq!(store.inventory()[0].stock, 0); // clamped, never negative
//!
//! store.sort(SortColumn::Price, true);
//! ```

pub mod debounce;
pub mod error;
pub mod notify;
pub mod report;
pub mod source;
pub mod state;
pub mod store;

pub use debounce::Debouncer;
pub use error::{LoadError, StoreError, StoreResult};
pub use notify::{Notice, Severity};
pub use report::InventoryReport;
pub use state::StoreState;
pub use store::{InventoryStore, LoadPhase, NewProduct};
