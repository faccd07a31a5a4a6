use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

/// Map a domain error onto the HTTP surface.
///
/// Client input errors become 400, missing records 404, storage failures 500
/// (the store already rolled back before surfacing them).
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::MissingField(_) => json_error(StatusCode::BAD_REQUEST, "missing_field", message),
        DomainError::TypeCoercion { .. } => {
            json_error(StatusCode::BAD_REQUEST, "invalid_value", message)
        }
        DomainError::NegativeQuantity => {
            json_error(StatusCode::BAD_REQUEST, "negative_quantity", message)
        }
        DomainError::NonPositivePrice => {
            json_error(StatusCode::BAD_REQUEST, "non_positive_price", message)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        DomainError::Storage(_) => {
            tracing::error!("storage failure: {message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
        }
    }
}

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
