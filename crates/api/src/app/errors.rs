use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rxdesk_core::DomainError;
use rxdesk_infra::OrderCreationError;
use rxdesk_reorder::FetchError;

use crate::app::services::ReorderDispatchError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::EmptySelection => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "empty_selection",
            "nothing selected for reorder",
        ),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn fetch_error_to_response(err: FetchError) -> axum::response::Response {
    json_error(StatusCode::SERVICE_UNAVAILABLE, "data_unavailable", err.to_string())
}

pub fn dispatch_error_to_response(err: ReorderDispatchError) -> axum::response::Response {
    match err {
        ReorderDispatchError::Domain(e) => domain_error_to_response(e),
        ReorderDispatchError::OrderCreation(e) => match e {
            OrderCreationError::Fetch(e) => fetch_error_to_response(e),
            OrderCreationError::Domain(e) => domain_error_to_response(e),
            OrderCreationError::UnknownSupplier(id) => json_error(
                StatusCode::CONFLICT,
                "stale_selection",
                format!("supplier {id} is no longer in the low-stock snapshot"),
            ),
        },
    }
}
