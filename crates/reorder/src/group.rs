//! Supplier aggregation: join the low-stock feed with the supplier directory
//! and tally severity tiers per supplier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rxdesk_catalog::{ProductStockRecord, StockSeverity};
use rxdesk_core::{ProductId, SupplierId};

use crate::source::{
    FetchError, LowStockGroup, StockSource, SupplierDirectory, SupplierProfile,
};

/// Per-supplier view-model over the low-stock feed.
///
/// Built per aggregation pass, never persisted. Product order is the feed's
/// order; a product belongs to exactly the group the feed reported it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierLowStock {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub contact: String,
    pub email: String,
    pub products: Vec<ProductStockRecord>,
    pub out_of_stock_count: usize,
    pub low_stock_count: usize,
    pub adequate_count: usize,
}

impl SupplierLowStock {
    /// Enrich one feed group against the directory.
    ///
    /// A missing directory entry degrades to a fallback label and empty
    /// contact fields; it is never an error.
    pub fn from_group(
        group: LowStockGroup,
        directory: &HashMap<SupplierId, SupplierProfile>,
    ) -> Self {
        let (supplier_name, contact, email) = match directory.get(&group.supplier_id) {
            Some(profile) => (
                profile.name.clone(),
                profile.contact.clone(),
                profile.email.clone(),
            ),
            None => (
                format!("Supplier {}", group.supplier_id),
                String::new(),
                String::new(),
            ),
        };

        let mut out_of_stock_count = 0;
        let mut low_stock_count = 0;
        for product in &group.products {
            match product.severity() {
                StockSeverity::OutOfStock => out_of_stock_count += 1,
                StockSeverity::LowStock => low_stock_count += 1,
                StockSeverity::Adequate => {}
            }
        }
        // Derived by subtraction so the three counts always sum to the
        // product count.
        let adequate_count = group.products.len() - out_of_stock_count - low_stock_count;

        Self {
            supplier_id: group.supplier_id,
            supplier_name,
            contact,
            email,
            products: group.products,
            out_of_stock_count,
            low_stock_count,
            adequate_count,
        }
    }

    /// Product ids in display order (the order the feed reported them).
    pub fn product_order(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.product_id).collect()
    }
}

/// Join feed groups with directory profiles. Group order follows the feed.
pub fn aggregate_low_stock(
    groups: Vec<LowStockGroup>,
    suppliers: Vec<SupplierProfile>,
) -> Vec<SupplierLowStock> {
    let directory: HashMap<SupplierId, SupplierProfile> = suppliers
        .into_iter()
        .map(|p| (p.supplier_id, p))
        .collect();

    groups
        .into_iter()
        .map(|g| SupplierLowStock::from_group(g, &directory))
        .collect()
}

/// Fetch both inputs and aggregate.
///
/// The two fetches are independent: a stock-feed failure propagates (there is
/// nothing to show), while a directory failure only degrades enrichment.
pub fn load_suggestions<S, D>(
    stock: &S,
    directory: &D,
) -> Result<Vec<SupplierLowStock>, FetchError>
where
    S: StockSource + ?Sized,
    D: SupplierDirectory + ?Sized,
{
    let groups = stock.fetch_low_stock_groups()?;

    let suppliers = match directory.fetch_suppliers() {
        Ok(suppliers) => suppliers,
        Err(err) => {
            tracing::warn!(error = %err, "supplier directory unavailable, degrading enrichment");
            Vec::new()
        }
    };

    Ok(aggregate_low_stock(groups, suppliers))
}
