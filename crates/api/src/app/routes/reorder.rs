use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use rxdesk_core::{ProductId, SupplierId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/suggestions", get(list_suggestions))
        .route("/refresh", post(refresh))
        .route("/suggestions/:id", get(get_suggestion))
        .route("/suggestions/:id/open", post(open_supplier))
        .route("/close", post(close_supplier))
        .route("/selection", get(get_selection))
        .route("/selection/toggle", post(toggle))
        .route("/selection/toggle-all", post(toggle_all))
        .route("/dispatch", post(dispatch))
}

pub async fn list_suggestions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .suggestions()
        .iter()
        .map(dto::group_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.refresh_suggestions() {
        Ok(suppliers) => (
            StatusCode::OK,
            Json(serde_json::json!({ "suppliers": suppliers })),
        )
            .into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn get_suggestion(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let supplier_id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid supplier id"),
    };

    match services.suggestion(supplier_id) {
        Some(group) => (StatusCode::OK, Json(dto::group_to_json(&group))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "supplier not in suggestions"),
    }
}

pub async fn open_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let supplier_id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid supplier id"),
    };

    match services.open_supplier(supplier_id) {
        Ok(group) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "supplier": dto::group_to_json(&group),
                "selection": dto::selection_to_json(&services.selection()),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn close_supplier(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    services.close_supplier();
    StatusCode::NO_CONTENT.into_response()
}

pub async fn get_selection(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(dto::selection_to_json(&services.selection())),
    )
        .into_response()
}

pub async fn toggle(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ToggleSelectionRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    // Toggles outside the open supplier's list are contractual no-ops; the
    // returned snapshot simply reflects whatever happened.
    let snapshot = services.toggle(product_id);
    (StatusCode::OK, Json(dto::selection_to_json(&snapshot))).into_response()
}

pub async fn toggle_all(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.toggle_all();
    (StatusCode::OK, Json(dto::selection_to_json(&snapshot))).into_response()
}

pub async fn dispatch(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dispatch_reorder() {
        Ok(order_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "order_id": order_id.to_string(),
                "status": "draft",
            })),
        )
            .into_response(),
        Err(e) => errors::dispatch_error_to_response(e),
    }
}
