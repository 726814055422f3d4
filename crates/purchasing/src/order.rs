use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rxdesk_core::{DomainError, DomainResult, ProductId, PurchaseOrderId, SupplierId};

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Draft,
    Submitted,
}

/// Line content supplied when drafting an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: u64,
}

/// Numbered purchase order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line_no: u32,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: u64,
}

/// Purchase order, created as a draft for the operator to review downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    id: PurchaseOrderId,
    supplier_id: SupplierId,
    status: PurchaseOrderStatus,
    lines: Vec<OrderLine>,
    created_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Draft a new order. Requires at least one line; quantities may be zero
    /// (they mirror advisory reorder amounts) but never negative.
    pub fn draft(
        id: PurchaseOrderId,
        supplier_id: SupplierId,
        lines: Vec<DraftLine>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if lines.is_empty() {
            return Err(DomainError::validation(
                "purchase order requires at least one line",
            ));
        }
        if lines.iter().any(|l| l.quantity < 0) {
            return Err(DomainError::validation("line quantity cannot be negative"));
        }

        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, l)| OrderLine {
                line_no: i as u32 + 1,
                product_id: l.product_id,
                quantity: l.quantity,
                unit_price: l.unit_price,
            })
            .collect();

        Ok(Self {
            id,
            supplier_id,
            status: PurchaseOrderStatus::Draft,
            lines,
            created_at,
        })
    }

    /// Submit a draft to the supplier.
    pub fn submit(&mut self) -> DomainResult<()> {
        if self.status != PurchaseOrderStatus::Draft {
            return Err(DomainError::validation("only draft orders can be submitted"));
        }
        self.status = PurchaseOrderStatus::Submitted;
        Ok(())
    }

    pub fn id(&self) -> PurchaseOrderId {
        self.id
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    pub fn status(&self) -> PurchaseOrderStatus {
        self.status
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i64) -> DraftLine {
        DraftLine {
            product_id: ProductId::new(),
            quantity,
            unit_price: 550,
        }
    }

    #[test]
    fn draft_numbers_lines_in_input_order() {
        let lines = vec![line(10), line(0), line(25)];
        let expected: Vec<ProductId> = lines.iter().map(|l| l.product_id).collect();

        let order = PurchaseOrder::draft(
            PurchaseOrderId::new(),
            SupplierId::new(),
            lines,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(order.status(), PurchaseOrderStatus::Draft);
        assert_eq!(order.lines().len(), 3);
        for (i, l) in order.lines().iter().enumerate() {
            assert_eq!(l.line_no, i as u32 + 1);
            assert_eq!(l.product_id, expected[i]);
        }
    }

    #[test]
    fn draft_rejects_empty_line_set() {
        let err = PurchaseOrder::draft(
            PurchaseOrderId::new(),
            SupplierId::new(),
            vec![],
            Utc::now(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn draft_rejects_negative_quantity() {
        let err = PurchaseOrder::draft(
            PurchaseOrderId::new(),
            SupplierId::new(),
            vec![line(-1)],
            Utc::now(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn submit_moves_draft_to_submitted_once() {
        let mut order = PurchaseOrder::draft(
            PurchaseOrderId::new(),
            SupplierId::new(),
            vec![line(5)],
            Utc::now(),
        )
        .unwrap();

        order.submit().unwrap();
        assert_eq!(order.status(), PurchaseOrderStatus::Submitted);

        let err = order.submit().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
