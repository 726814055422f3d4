use serde::Deserialize;

use rxdesk_catalog::ProductStockRecord;
use rxdesk_purchasing::PurchaseOrder;
use rxdesk_reorder::SupplierLowStock;

use crate::app::services::SelectionSnapshot;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ToggleSelectionRequest {
    pub product_id: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(rec: &ProductStockRecord) -> serde_json::Value {
    serde_json::json!({
        "id": rec.product_id.to_string(),
        "name": rec.name,
        "sku": rec.sku,
        "manufacturer": rec.manufacturer_label(),
        "batch_no": rec.batch_label(),
        "current_stock": rec.current_stock,
        "reorder_threshold": rec.reorder_threshold,
        "reorder_quantity": rec.reorder_quantity,
        "purchase_price": rec.purchase_price,
        "severity": rec.severity(),
    })
}

pub fn group_to_json(group: &SupplierLowStock) -> serde_json::Value {
    serde_json::json!({
        "supplier_id": group.supplier_id.to_string(),
        "supplier_name": group.supplier_name,
        "contact": group.contact,
        "email": group.email,
        "out_of_stock_count": group.out_of_stock_count,
        "low_stock_count": group.low_stock_count,
        "adequate_count": group.adequate_count,
        "products": group.products.iter().map(product_to_json).collect::<Vec<_>>(),
    })
}

pub fn selection_to_json(snapshot: &SelectionSnapshot) -> serde_json::Value {
    serde_json::json!({
        "supplier_id": snapshot.supplier_id.map(|id| id.to_string()),
        "selected": snapshot.selected.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        "count": snapshot.count,
        "state": snapshot.state,
        "can_reorder": snapshot.can_reorder,
    })
}

pub fn purchase_order_to_json(order: &PurchaseOrder) -> serde_json::Value {
    serde_json::json!({
        "id": order.id().to_string(),
        "supplier_id": order.supplier_id().to_string(),
        "status": order.status(),
        "created_at": order.created_at().to_rfc3339(),
        "lines": order.lines().iter().map(|l| serde_json::json!({
            "line_no": l.line_no,
            "product_id": l.product_id.to_string(),
            "quantity": l.quantity,
            "unit_price": l.unit_price,
        })).collect::<Vec<_>>(),
    })
}
