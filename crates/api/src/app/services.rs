use std::sync::{Arc, Mutex};

use thiserror::Error;

use rxdesk_core::{DomainError, DomainResult, ProductId, PurchaseOrderId, SupplierId};
use rxdesk_infra::{
    DraftOrderDispatcher, InMemoryStockSource, InMemoryStore, InMemorySupplierDirectory,
    OrderCreationError, ReorderWorkbench,
};
use rxdesk_purchasing::PurchaseOrder;
use rxdesk_reorder::{
    FetchError, LowStockGroup, ReorderSink, SelectionState, SupplierLowStock, SupplierProfile,
};

type OrderDispatcher =
    DraftOrderDispatcher<Arc<InMemoryStockSource>, Arc<InMemoryStore<PurchaseOrderId, PurchaseOrder>>>;

/// Failure of the dispatch step: either the handoff precondition or the
/// receiving order-creation workflow.
#[derive(Debug, Error)]
pub enum ReorderDispatchError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    OrderCreation(#[from] OrderCreationError),
}

/// Read-only view of the current selection, for rendering.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    pub supplier_id: Option<SupplierId>,
    pub selected: Vec<ProductId>,
    pub count: usize,
    pub state: SelectionState,
    pub can_reorder: bool,
}

/// Application wiring: in-memory sources, the single-operator workbench, and
/// the draft-order dispatcher.
pub struct AppServices {
    stock_source: Arc<InMemoryStockSource>,
    supplier_directory: Arc<InMemorySupplierDirectory>,
    // One workbench per process: this is a single-operator desk, and the
    // selection contract allows at most one open detail view.
    workbench: Mutex<ReorderWorkbench>,
    order_creation: OrderDispatcher,
}

pub fn build_services() -> AppServices {
    let stock_source = Arc::new(InMemoryStockSource::new());
    let supplier_directory = Arc::new(InMemorySupplierDirectory::new());
    let order_creation =
        DraftOrderDispatcher::new(stock_source.clone(), Arc::new(InMemoryStore::new()));

    AppServices {
        stock_source,
        supplier_directory,
        workbench: Mutex::new(ReorderWorkbench::new()),
        order_creation,
    }
}

impl AppServices {
    pub fn replace_stock_snapshot(&self, groups: Vec<LowStockGroup>) {
        self.stock_source.replace(groups);
    }

    pub fn replace_supplier_directory(&self, suppliers: Vec<SupplierProfile>) {
        self.supplier_directory.replace(suppliers);
    }

    /// Re-derive the suggestion list; returns the supplier count.
    pub fn refresh_suggestions(&self) -> Result<usize, FetchError> {
        let mut workbench = self.workbench.lock().unwrap();
        workbench.refresh(&self.stock_source, &self.supplier_directory)?;
        Ok(workbench.suggestions().len())
    }

    pub fn suggestions(&self) -> Vec<SupplierLowStock> {
        self.workbench.lock().unwrap().suggestions().to_vec()
    }

    pub fn suggestion(&self, supplier_id: SupplierId) -> Option<SupplierLowStock> {
        self.workbench
            .lock()
            .unwrap()
            .suggestion(supplier_id)
            .cloned()
    }

    pub fn open_supplier(&self, supplier_id: SupplierId) -> DomainResult<SupplierLowStock> {
        let mut workbench = self.workbench.lock().unwrap();
        workbench.open_supplier(supplier_id).cloned()
    }

    pub fn close_supplier(&self) {
        self.workbench.lock().unwrap().close_supplier();
    }

    pub fn toggle(&self, product_id: ProductId) -> SelectionSnapshot {
        let mut workbench = self.workbench.lock().unwrap();
        workbench.toggle(product_id);
        snapshot(&workbench)
    }

    pub fn toggle_all(&self) -> SelectionSnapshot {
        let mut workbench = self.workbench.lock().unwrap();
        workbench.toggle_all();
        snapshot(&workbench)
    }

    pub fn selection(&self) -> SelectionSnapshot {
        snapshot(&self.workbench.lock().unwrap())
    }

    /// Hand the current selection off to order creation.
    ///
    /// On success the detail view closes and the selection is discarded; on
    /// failure everything stays as it was.
    pub fn dispatch_reorder(&self) -> Result<PurchaseOrderId, ReorderDispatchError> {
        let mut workbench = self.workbench.lock().unwrap();
        let request = workbench.build_request()?;
        let order_id = self.order_creation.on_reorder(request)?;
        workbench.close_supplier();
        Ok(order_id)
    }

    pub fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        self.order_creation.orders()
    }

    pub fn purchase_order(&self, id: &PurchaseOrderId) -> Option<PurchaseOrder> {
        self.order_creation.order(id)
    }
}

fn snapshot(workbench: &ReorderWorkbench) -> SelectionSnapshot {
    SelectionSnapshot {
        supplier_id: workbench.active_supplier(),
        selected: workbench.selected_in_order(),
        count: workbench.selection_count(),
        state: workbench.selection_state(),
        can_reorder: workbench.can_reorder(),
    }
}
