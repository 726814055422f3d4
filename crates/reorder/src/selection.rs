//! Bulk-selection state machine for the open supplier detail view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use rxdesk_core::{DomainResult, ProductId, SupplierId};

use crate::handoff::{build_reorder_request, ReorderRequest};

/// Coarse selection state, as the detail view renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    Empty,
    Partial,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenSupplier {
    supplier_id: SupplierId,
    /// Display order of the open supplier's products. Drives handoff order.
    product_order: Vec<ProductId>,
    selected: HashSet<ProductId>,
}

/// Selection controller scoped to at most one open supplier detail view.
///
/// Opening a supplier (or closing the view) resets the selection
/// unconditionally; selections never outlive the view they were made in.
/// Toggles referencing products outside the open supplier's list are no-ops:
/// the UI should never produce them, but the contract guards against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderSelection {
    open: Option<OpenSupplier>,
}

impl ReorderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a supplier's detail view. Any prior selection is discarded.
    pub fn open_supplier(
        &mut self,
        supplier_id: SupplierId,
        product_order: impl IntoIterator<Item = ProductId>,
    ) {
        self.open = Some(OpenSupplier {
            supplier_id,
            product_order: product_order.into_iter().collect(),
            selected: HashSet::new(),
        });
    }

    /// Close the detail view, discarding the selection.
    pub fn close_supplier(&mut self) {
        self.open = None;
    }

    /// The supplier whose detail view is open, if any.
    pub fn active_supplier(&self) -> Option<SupplierId> {
        self.open.as_ref().map(|o| o.supplier_id)
    }

    /// Toggle one product in or out of the selection.
    pub fn toggle(&mut self, product_id: ProductId) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        if !open.product_order.contains(&product_id) {
            return;
        }
        if !open.selected.remove(&product_id) {
            open.selected.insert(product_id);
        }
    }

    /// Combined select-all/deselect-all: from `All` clear everything,
    /// from anything else select everything.
    pub fn toggle_all(&mut self) {
        if self.state() == SelectionState::All {
            if let Some(open) = self.open.as_mut() {
                open.selected.clear();
            }
        } else if let Some(open) = self.open.as_mut() {
            open.selected = open.product_order.iter().copied().collect();
        }
    }

    pub fn is_selected(&self, product_id: ProductId) -> bool {
        self.open
            .as_ref()
            .is_some_and(|o| o.selected.contains(&product_id))
    }

    pub fn selection_count(&self) -> usize {
        self.open.as_ref().map_or(0, |o| o.selected.len())
    }

    /// Whether the reorder action may be triggered.
    pub fn can_reorder(&self) -> bool {
        self.selection_count() > 0
    }

    pub fn state(&self) -> SelectionState {
        match &self.open {
            Some(open) if !open.selected.is_empty() => {
                if open.selected.len() == open.product_order.len() {
                    SelectionState::All
                } else {
                    SelectionState::Partial
                }
            }
            _ => SelectionState::Empty,
        }
    }

    /// Selected ids in the open supplier's product order (not toggle order).
    pub fn selected_in_order(&self) -> Vec<ProductId> {
        self.open.as_ref().map_or_else(Vec::new, |o| {
            o.product_order
                .iter()
                .copied()
                .filter(|id| o.selected.contains(id))
                .collect()
        })
    }

    /// Build the handoff request for the current selection.
    ///
    /// Fails with `EmptySelection` when nothing is selected (or no detail
    /// view is open); the trigger should already be disabled in that case.
    pub fn build_request(&self) -> DomainResult<ReorderRequest> {
        match &self.open {
            Some(open) => {
                build_reorder_request(open.supplier_id, &open.product_order, &open.selected)
            }
            None => Err(rxdesk_core::DomainError::EmptySelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rxdesk_core::DomainError;

    fn ids(n: usize) -> Vec<ProductId> {
        (0..n).map(|_| ProductId::new()).collect()
    }

    fn open_with(n: usize) -> (ReorderSelection, Vec<ProductId>) {
        let products = ids(n);
        let mut selection = ReorderSelection::new();
        selection.open_supplier(SupplierId::new(), products.clone());
        (selection, products)
    }

    #[test]
    fn opening_a_supplier_starts_empty() {
        let (selection, _) = open_with(3);
        assert_eq!(selection.state(), SelectionState::Empty);
        assert_eq!(selection.selection_count(), 0);
        assert!(!selection.can_reorder());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let (mut selection, products) = open_with(3);

        selection.toggle(products[1]);
        assert!(selection.is_selected(products[1]));
        assert_eq!(selection.selection_count(), 1);
        assert_eq!(selection.state(), SelectionState::Partial);

        selection.toggle(products[1]);
        assert!(!selection.is_selected(products[1]));
        assert_eq!(selection.state(), SelectionState::Empty);
    }

    #[test]
    fn odd_toggles_survive_even_toggles_cancel() {
        // Toggle P2, P1, P2 again: only P1 stays selected.
        let (mut selection, products) = open_with(3);
        selection.toggle(products[1]);
        selection.toggle(products[0]);
        selection.toggle(products[1]);

        assert!(selection.is_selected(products[0]));
        assert!(!selection.is_selected(products[1]));
        assert_eq!(selection.selection_count(), 1);
    }

    #[test]
    fn toggle_outside_open_supplier_is_a_no_op() {
        let (mut selection, _) = open_with(2);
        let foreign = ProductId::new();

        selection.toggle(foreign);
        assert_eq!(selection.selection_count(), 0);
        assert!(!selection.is_selected(foreign));
    }

    #[test]
    fn toggle_without_open_supplier_is_a_no_op() {
        let mut selection = ReorderSelection::new();
        selection.toggle(ProductId::new());
        selection.toggle_all();
        assert_eq!(selection.selection_count(), 0);
        assert_eq!(selection.state(), SelectionState::Empty);
    }

    #[test]
    fn toggle_all_selects_everything_then_clears() {
        let (mut selection, products) = open_with(3);

        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::All);
        assert_eq!(selection.selection_count(), products.len());

        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::Empty);
        assert_eq!(selection.selection_count(), 0);
    }

    #[test]
    fn toggle_all_from_partial_goes_to_all() {
        let (mut selection, products) = open_with(3);
        selection.toggle(products[0]);
        assert_eq!(selection.state(), SelectionState::Partial);

        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::All);
    }

    #[test]
    fn toggle_all_twice_is_identity_on_the_extremes() {
        let (mut selection, _) = open_with(4);

        // From Empty.
        selection.toggle_all();
        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::Empty);

        // From All.
        selection.toggle_all();
        let all_before = selection.selected_in_order();
        selection.toggle_all();
        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::All);
        assert_eq!(selection.selected_in_order(), all_before);
    }

    #[test]
    fn opening_another_supplier_resets_the_selection() {
        let (mut selection, products) = open_with(3);
        selection.toggle(products[0]);
        assert!(selection.can_reorder());

        let other = SupplierId::new();
        selection.open_supplier(other, ids(2));
        assert_eq!(selection.selection_count(), 0);
        assert_eq!(selection.state(), SelectionState::Empty);
        assert_eq!(selection.active_supplier(), Some(other));
    }

    #[test]
    fn closing_discards_the_selection() {
        let (mut selection, products) = open_with(2);
        selection.toggle(products[0]);

        selection.close_supplier();
        assert_eq!(selection.active_supplier(), None);
        assert_eq!(selection.selection_count(), 0);
        assert!(!selection.can_reorder());
    }

    #[test]
    fn empty_product_list_stays_empty_under_toggle_all() {
        let (mut selection, _) = open_with(0);
        selection.toggle_all();
        assert_eq!(selection.state(), SelectionState::Empty);
        assert!(!selection.can_reorder());
    }

    #[test]
    fn build_request_without_open_view_is_empty_selection() {
        let selection = ReorderSelection::new();
        assert_eq!(
            selection.build_request().unwrap_err(),
            DomainError::EmptySelection
        );
    }

    proptest! {
        /// After any toggle sequence over valid ids, the selection is exactly
        /// the ids toggled an odd number of times.
        #[test]
        fn selection_tracks_odd_toggle_parity(
            n in 1usize..12,
            picks in proptest::collection::vec(0usize..12, 0..64)
        ) {
            let (mut selection, products) = open_with(n);

            let mut parity = vec![0usize; n];
            for pick in picks {
                let idx = pick % n;
                selection.toggle(products[idx]);
                parity[idx] += 1;
            }

            let expected = parity.iter().filter(|&&c| c % 2 == 1).count();
            prop_assert_eq!(selection.selection_count(), expected);
            for (idx, count) in parity.iter().enumerate() {
                prop_assert_eq!(selection.is_selected(products[idx]), count % 2 == 1);
            }
        }

        /// `open_supplier` always yields an empty selection, whatever came
        /// before.
        #[test]
        fn open_supplier_always_resets(
            n in 1usize..8,
            picks in proptest::collection::vec(0usize..8, 0..16)
        ) {
            let (mut selection, products) = open_with(n);
            for pick in picks {
                selection.toggle(products[pick % n]);
            }

            selection.open_supplier(SupplierId::new(), products);
            prop_assert_eq!(selection.selection_count(), 0);
            prop_assert!(!selection.can_reorder());
        }
    }
}
