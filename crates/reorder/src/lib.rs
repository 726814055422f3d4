//! Reorder suggestion engine.
//!
//! Scans per-supplier low-stock feeds, enriches them against the supplier
//! directory, classifies severity, and drives the bulk-selection workflow
//! that hands off to purchase-order creation. All of it is deterministic
//! in-memory derivation; fetching is behind the ports in [`source`].

pub mod group;
pub mod handoff;
pub mod selection;
pub mod source;

pub use group::{aggregate_low_stock, load_suggestions, SupplierLowStock};
pub use handoff::{build_reorder_request, ReorderRequest, ReorderSink};
pub use selection::{ReorderSelection, SelectionState};
pub use source::{FetchError, LowStockGroup, StockSource, SupplierDirectory, SupplierProfile};
