use std::sync::RwLock;

use rxdesk_reorder::{FetchError, LowStockGroup, StockSource};

/// In-memory stock source holding the latest low-stock snapshot pushed by the
/// upstream pharmacy system. Group order is the push order.
#[derive(Debug, Default)]
pub struct InMemoryStockSource {
    groups: RwLock<Vec<LowStockGroup>>,
}

impl InMemoryStockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale (the feed pushes full snapshots, not
    /// deltas).
    pub fn replace(&self, groups: Vec<LowStockGroup>) {
        if let Ok(mut current) = self.groups.write() {
            *current = groups;
        }
    }
}

impl StockSource for InMemoryStockSource {
    fn fetch_low_stock_groups(&self) -> Result<Vec<LowStockGroup>, FetchError> {
        self.groups
            .read()
            .map(|g| g.clone())
            .map_err(|_| FetchError::unavailable("stock snapshot lock poisoned"))
    }
}
