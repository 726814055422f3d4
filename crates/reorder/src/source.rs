//! Ports to the upstream data collaborators.
//!
//! The engine never fetches anything itself; it consumes these two read
//! interfaces and treats their failures as "data unavailable", not as
//! corruption of its own state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rxdesk_catalog::ProductStockRecord;
use rxdesk_core::SupplierId;

/// Transient failure while fetching from an upstream collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("upstream returned malformed data: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// One supplier's products at or below their reorder thresholds, as reported
/// by the stock feed. Product order is the feed's order and is preserved
/// end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockGroup {
    pub supplier_id: SupplierId,
    pub products: Vec<ProductStockRecord>,
}

/// Directory record for a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub supplier_id: SupplierId,
    pub name: String,
    pub contact: String,
    pub email: String,
}

/// Read interface over the low-stock feed.
pub trait StockSource: Send + Sync {
    fn fetch_low_stock_groups(&self) -> Result<Vec<LowStockGroup>, FetchError>;
}

/// Read interface over the supplier directory.
pub trait SupplierDirectory: Send + Sync {
    fn fetch_suppliers(&self) -> Result<Vec<SupplierProfile>, FetchError>;
}

impl<S> StockSource for Arc<S>
where
    S: StockSource + ?Sized,
{
    fn fetch_low_stock_groups(&self) -> Result<Vec<LowStockGroup>, FetchError> {
        (**self).fetch_low_stock_groups()
    }
}

impl<D> SupplierDirectory for Arc<D>
where
    D: SupplierDirectory + ?Sized,
{
    fn fetch_suppliers(&self) -> Result<Vec<SupplierProfile>, FetchError> {
        (**self).fetch_suppliers()
    }
}
