use axum::Router;

pub mod purchases;
pub mod reorder;
pub mod sync;
pub mod system;

/// Router for all back-office endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/sync", sync::router())
        .nest("/reorder", reorder::router())
        .nest("/purchase-orders", purchases::router())
}
