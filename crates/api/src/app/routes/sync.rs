//! Snapshot ingestion from the upstream pharmacy system.
//!
//! The reorder engine never fetches remote data itself; the upstream system
//! pushes full snapshots here and the operator refreshes suggestions off
//! them.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::put,
    Json, Router,
};

use rxdesk_reorder::{LowStockGroup, SupplierProfile};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/stock", put(replace_stock))
        .route("/suppliers", put(replace_suppliers))
}

pub async fn replace_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Json(groups): Json<Vec<LowStockGroup>>,
) -> axum::response::Response {
    tracing::info!(suppliers = groups.len(), "stock snapshot replaced");
    services.replace_stock_snapshot(groups);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn replace_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
    Json(suppliers): Json<Vec<SupplierProfile>>,
) -> axum::response::Response {
    tracing::info!(suppliers = suppliers.len(), "supplier directory replaced");
    services.replace_supplier_directory(suppliers);
    StatusCode::NO_CONTENT.into_response()
}
