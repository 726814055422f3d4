//! Catalog domain module (product stock records, severity classification).
//!
//! This crate contains the stock-level vocabulary shared by the reorder
//! engine, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod record;
pub mod severity;

pub use record::ProductStockRecord;
pub use severity::{classify, StockSeverity};
