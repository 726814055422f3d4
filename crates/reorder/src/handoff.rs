//! Handoff to the order-creation workflow.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use rxdesk_core::{DomainError, DomainResult, ProductId, PurchaseOrderId, SupplierId};

/// Well-formed, non-empty reorder request.
///
/// `product_ids` follow the supplier's product-list order, not the order the
/// operator clicked in, so the payload is stable for a given selection.
/// The engine hands the request to a [`ReorderSink`] and retains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub supplier_id: SupplierId,
    pub product_ids: Vec<ProductId>,
}

/// Build a reorder request from a selection over a supplier's product list.
///
/// Fails with [`DomainError::EmptySelection`] when nothing is selected; the
/// triggering action should already be disabled, this guards the contract.
pub fn build_reorder_request(
    supplier_id: SupplierId,
    product_order: &[ProductId],
    selected: &HashSet<ProductId>,
) -> DomainResult<ReorderRequest> {
    if selected.is_empty() {
        return Err(DomainError::EmptySelection);
    }

    let product_ids: Vec<ProductId> = product_order
        .iter()
        .copied()
        .filter(|id| selected.contains(id))
        .collect();

    Ok(ReorderRequest {
        supplier_id,
        product_ids,
    })
}

/// Receiving end of the reorder handoff (the order-creation workflow).
///
/// Everything downstream (drafting the purchase order, pre-filling
/// quantities) is the implementor's responsibility; the engine's part ends
/// at producing a well-formed request.
pub trait ReorderSink: Send + Sync {
    type Error: core::fmt::Debug;

    fn on_reorder(&self, request: ReorderRequest) -> Result<PurchaseOrderId, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        let err =
            build_reorder_request(SupplierId::new(), &[ProductId::new()], &HashSet::new())
                .unwrap_err();
        assert_eq!(err, DomainError::EmptySelection);
    }

    #[test]
    fn product_ids_follow_list_order_not_selection_order() {
        let supplier_id = SupplierId::new();
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        let p3 = ProductId::new();
        let order = [p1, p2, p3];

        // Selected "P3 then P1"; a set has no order, the list does.
        let selected: HashSet<ProductId> = [p3, p1].into_iter().collect();

        let request = build_reorder_request(supplier_id, &order, &selected).unwrap();
        assert_eq!(request.supplier_id, supplier_id);
        assert_eq!(request.product_ids, vec![p1, p3]);
    }

    #[test]
    fn full_selection_yields_the_whole_list() {
        let order: Vec<ProductId> = (0..4).map(|_| ProductId::new()).collect();
        let selected: HashSet<ProductId> = order.iter().copied().collect();

        let request =
            build_reorder_request(SupplierId::new(), &order, &selected).unwrap();
        assert_eq!(request.product_ids, order);
    }
}
