//! `rxdesk-infra` — adapters and application-state glue around the reorder
//! engine: in-memory implementations of the source ports, the keyed store for
//! draft orders, the operator workbench, and the dispatcher that turns
//! reorder requests into draft purchase orders.

pub mod reorder_dispatcher;
pub mod stock_source;
pub mod store;
pub mod supplier_directory;
pub mod workbench;

pub use reorder_dispatcher::{DraftOrderDispatcher, OrderCreationError};
pub use stock_source::InMemoryStockSource;
pub use store::{InMemoryStore, KeyedStore};
pub use supplier_directory::InMemorySupplierDirectory;
pub use workbench::ReorderWorkbench;
