//! Receiving end of the reorder handoff: drafts a purchase order from a
//! reorder request and records it.

use chrono::Utc;
use thiserror::Error;

use rxdesk_core::{DomainError, PurchaseOrderId, SupplierId};
use rxdesk_purchasing::{DraftLine, PurchaseOrder};
use rxdesk_reorder::{FetchError, ReorderRequest, ReorderSink, StockSource};

use crate::store::KeyedStore;

#[derive(Debug, Error)]
pub enum OrderCreationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("no low-stock data for supplier {0}")]
    UnknownSupplier(SupplierId),
}

/// Creates draft purchase orders from reorder requests.
///
/// Quantities are pre-filled from each product's advisory `reorder_quantity`
/// and unit prices from its `purchase_price`, both resolved against the
/// current stock snapshot.
pub struct DraftOrderDispatcher<S, K> {
    stock: S,
    orders: K,
}

impl<S, K> DraftOrderDispatcher<S, K>
where
    S: StockSource,
    K: KeyedStore<PurchaseOrderId, PurchaseOrder>,
{
    pub fn new(stock: S, orders: K) -> Self {
        Self { stock, orders }
    }

    pub fn order(&self, id: &PurchaseOrderId) -> Option<PurchaseOrder> {
        self.orders.get(id)
    }

    /// All recorded orders, newest first.
    pub fn orders(&self) -> Vec<PurchaseOrder> {
        let mut orders = self.orders.list();
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at()));
        orders
    }
}

impl<S, K> ReorderSink for DraftOrderDispatcher<S, K>
where
    S: StockSource,
    K: KeyedStore<PurchaseOrderId, PurchaseOrder>,
{
    type Error = OrderCreationError;

    fn on_reorder(&self, request: ReorderRequest) -> Result<PurchaseOrderId, Self::Error> {
        let groups = self.stock.fetch_low_stock_groups()?;
        let group = groups
            .into_iter()
            .find(|g| g.supplier_id == request.supplier_id)
            .ok_or(OrderCreationError::UnknownSupplier(request.supplier_id))?;

        let mut lines = Vec::with_capacity(request.product_ids.len());
        for product_id in &request.product_ids {
            match group.products.iter().find(|p| p.product_id == *product_id) {
                Some(record) => lines.push(DraftLine {
                    product_id: record.product_id,
                    quantity: record.reorder_quantity,
                    unit_price: record.purchase_price,
                }),
                None => {
                    // Requests are built against the same snapshot, so this
                    // only fires on a stale or hand-crafted request.
                    tracing::warn!(%product_id, "requested product not in supplier feed, skipping line");
                }
            }
        }

        let order_id = PurchaseOrderId::new();
        let order = PurchaseOrder::draft(order_id, request.supplier_id, lines, Utc::now())?;
        tracing::info!(
            %order_id,
            supplier_id = %request.supplier_id,
            lines = order.lines().len(),
            "drafted purchase order from reorder request"
        );
        self.orders.upsert(order_id, order);
        Ok(order_id)
    }
}
