//! # stocklens-core: Pure Domain Logic for Stocklens
//!
//! This crate is the **heart** of Stocklens. It contains the domain types and
//! the pure pieces of the view pipeline, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stocklens Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (excluded)                  │   │
//! │  │    Search box ──► Table ──► Stock modal ──► Export button   │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                      stocklens-store                        │   │
//! │  │    Inventory + View, load, adjust, create, debounce         │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ stocklens-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐              │   │
//! │  │   │   types   │  │ validation│  │   stats   │              │   │
//! │  │   │  Product  │  │   rules   │  │ Statistics│              │   │
//! │  │   │ SortState │  │  checks   │  │   math    │              │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO TIMERS • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network and timers are FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

pub mod error;
pub mod stats;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use stats::Statistics;
pub use types::{Product, SortColumn, SortDirection, SortState, StockOp};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a product is flagged as low stock.
///
/// ## Business Reason
/// Drives the low-stock counter in the statistics cards and the low-stock
/// section of the exported report. Fixed for now; could be made configurable
/// per deployment later.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Debounce window for search-as-you-type, in milliseconds.
///
/// Rapid keystrokes inside this window collapse into a single view
/// recomputation using only the most recent input.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
