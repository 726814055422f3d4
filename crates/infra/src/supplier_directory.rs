use std::sync::RwLock;

use rxdesk_reorder::{FetchError, SupplierDirectory, SupplierProfile};

/// In-memory supplier directory fed by snapshot pushes.
#[derive(Debug, Default)]
pub struct InMemorySupplierDirectory {
    suppliers: RwLock<Vec<SupplierProfile>>,
}

impl InMemorySupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the directory wholesale.
    pub fn replace(&self, suppliers: Vec<SupplierProfile>) {
        if let Ok(mut current) = self.suppliers.write() {
            *current = suppliers;
        }
    }

    /// Add or update a single profile.
    pub fn register(&self, profile: SupplierProfile) {
        if let Ok(mut current) = self.suppliers.write() {
            match current.iter_mut().find(|p| p.supplier_id == profile.supplier_id) {
                Some(existing) => *existing = profile,
                None => current.push(profile),
            }
        }
    }
}

impl SupplierDirectory for InMemorySupplierDirectory {
    fn fetch_suppliers(&self) -> Result<Vec<SupplierProfile>, FetchError> {
        self.suppliers
            .read()
            .map(|s| s.clone())
            .map_err(|_| FetchError::unavailable("supplier directory lock poisoned"))
    }
}
