//! Stock severity classification.

use serde::{Deserialize, Serialize};

/// Severity tier of a product's current stock against its reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockSeverity {
    OutOfStock,
    LowStock,
    Adequate,
}

/// Classify a stock level against a reorder threshold.
///
/// Total over all integer pairs; equality with the threshold counts as
/// `LowStock` (the threshold is the trigger point, inclusive).
pub fn classify(current_stock: i64, reorder_threshold: i64) -> StockSeverity {
    if current_stock <= 0 {
        StockSeverity::OutOfStock
    } else if current_stock <= reorder_threshold {
        StockSeverity::LowStock
    } else {
        StockSeverity::Adequate
    }
}
