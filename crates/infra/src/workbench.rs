//! Operator workbench: the thin state holder between the HTTP layer and the
//! pure reorder engine.

use rxdesk_core::{DomainError, DomainResult, ProductId, SupplierId};
use rxdesk_reorder::{
    load_suggestions, FetchError, ReorderRequest, ReorderSelection, SelectionState,
    StockSource, SupplierDirectory, SupplierLowStock,
};

/// Holds the current suggestion list plus the selection for the (at most one)
/// open supplier detail view. Every rule lives in the engine; this type only
/// sequences calls and owns the state between requests.
#[derive(Debug, Default)]
pub struct ReorderWorkbench {
    suggestions: Vec<SupplierLowStock>,
    selection: ReorderSelection,
}

impl ReorderWorkbench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the suggestion list from the sources.
    ///
    /// Fetches before mutating anything: a failed refresh leaves both the
    /// previous suggestions and the selection untouched. A successful refresh
    /// replaces the list and closes any open detail view, since the selection
    /// was made against the old product lists.
    pub fn refresh<S, D>(&mut self, stock: &S, directory: &D) -> Result<(), FetchError>
    where
        S: StockSource + ?Sized,
        D: SupplierDirectory + ?Sized,
    {
        let suggestions = load_suggestions(stock, directory)?;
        self.suggestions = suggestions;
        self.selection.close_supplier();
        Ok(())
    }

    pub fn suggestions(&self) -> &[SupplierLowStock] {
        &self.suggestions
    }

    pub fn suggestion(&self, supplier_id: SupplierId) -> Option<&SupplierLowStock> {
        self.suggestions
            .iter()
            .find(|g| g.supplier_id == supplier_id)
    }

    /// Open a supplier's detail view; the selection starts empty.
    pub fn open_supplier(&mut self, supplier_id: SupplierId) -> DomainResult<&SupplierLowStock> {
        let idx = self
            .suggestions
            .iter()
            .position(|g| g.supplier_id == supplier_id)
            .ok_or(DomainError::NotFound)?;

        let order = self.suggestions[idx].product_order();
        self.selection.open_supplier(supplier_id, order);
        Ok(&self.suggestions[idx])
    }

    pub fn close_supplier(&mut self) {
        self.selection.close_supplier();
    }

    /// The group backing the open detail view, if one is open.
    pub fn open_group(&self) -> Option<&SupplierLowStock> {
        self.selection
            .active_supplier()
            .and_then(|id| self.suggestion(id))
    }

    pub fn toggle(&mut self, product_id: ProductId) {
        self.selection.toggle(product_id);
    }

    pub fn toggle_all(&mut self) {
        self.selection.toggle_all();
    }

    pub fn is_selected(&self, product_id: ProductId) -> bool {
        self.selection.is_selected(product_id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.selection_count()
    }

    pub fn can_reorder(&self) -> bool {
        self.selection.can_reorder()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selected_in_order(&self) -> Vec<ProductId> {
        self.selection.selected_in_order()
    }

    pub fn active_supplier(&self) -> Option<SupplierId> {
        self.selection.active_supplier()
    }

    /// Build the handoff request for the current selection.
    pub fn build_request(&self) -> DomainResult<ReorderRequest> {
        self.selection.build_request()
    }
}
