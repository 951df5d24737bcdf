use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, "invalid_input", message),
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::OutOfStock(_) => json_error(StatusCode::BAD_REQUEST, "out_of_stock", message),
        DomainError::NoStock => json_error(StatusCode::BAD_REQUEST, "no_stock", message),
    }
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::warn!(error = %rejection.body_text(), "rejected request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": "error",
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
