use serde::{Deserialize, Serialize};

use rxdesk_core::ProductId;

use crate::severity::{classify, StockSeverity};

/// Placeholder shown for absent display attributes.
const MISSING_LABEL: &str = "N/A";

/// Per-product stock record as reported by the upstream stock feed.
///
/// Stock levels are `i64` so upstream corrections below zero still classify
/// (anything at or below zero is out of stock). Prices are in the smallest
/// currency unit and are display/valuation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStockRecord {
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    pub manufacturer: Option<String>,
    pub batch_no: Option<String>,
    pub current_stock: i64,
    pub reorder_threshold: i64,
    /// Suggested replenishment amount. Advisory only, never enforced.
    pub reorder_quantity: i64,
    pub purchase_price: u64,
}

impl ProductStockRecord {
    /// Severity tier of this record's stock level.
    pub fn severity(&self) -> StockSeverity {
        classify(self.current_stock, self.reorder_threshold)
    }

    /// Manufacturer for display, with a placeholder when absent.
    pub fn manufacturer_label(&self) -> &str {
        self.manufacturer.as_deref().unwrap_or(MISSING_LABEL)
    }

    /// Batch number for display, with a placeholder when absent.
    pub fn batch_label(&self) -> &str {
        self.batch_no.as_deref().unwrap_or(MISSING_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stock: i64, threshold: i64) -> ProductStockRecord {
        ProductStockRecord {
            product_id: ProductId::new(),
            name: "Paracetamol 500mg".to_string(),
            sku: "PARA-500".to_string(),
            manufacturer: None,
            batch_no: Some("B-2301".to_string()),
            current_stock: stock,
            reorder_threshold: threshold,
            reorder_quantity: 40,
            purchase_price: 1250,
        }
    }

    #[test]
    fn severity_delegates_to_classifier() {
        assert_eq!(record(0, 5).severity(), StockSeverity::OutOfStock);
        assert_eq!(record(5, 5).severity(), StockSeverity::LowStock);
        assert_eq!(record(9, 5).severity(), StockSeverity::Adequate);
    }

    #[test]
    fn absent_display_attributes_fall_back_to_placeholder() {
        let rec = record(1, 5);
        assert_eq!(rec.manufacturer_label(), "N/A");
        assert_eq!(rec.batch_label(), "B-2301");
    }
}
