use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use storefront_core::{DomainError, OrderId};
use storefront_orders::PlaceOrder;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateOrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let cmd = match PlaceOrder::parse(body.sku.as_deref(), body.customer_name.as_deref(), Utc::now()) {
        Ok(cmd) => cmd,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.shop().create_order(cmd) {
        Ok(order) => (StatusCode::CREATED, Json(dto::order_placed_to_json(&order))).into_response(),
        Err(e) => {
            tracing::warn!(sku = ?body.sku, error = %e, "order rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.shop().list_orders())).into_response()
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::domain_error_to_response(DomainError::not_found(format!("order {id}"))),
    };
    match services.shop().get_order(id) {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// The body is optional: no body, a non-JSON body or a blank name all order
/// for `"Guest"`.
pub async fn surprise_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::SurpriseOrderRequest>>,
) -> axum::response::Response {
    let customer_name = body.and_then(|Json(b)| b.customer_name);

    match services.shop().surprise_order(customer_name.as_deref(), Utc::now()) {
        Ok(order) => (StatusCode::CREATED, Json(dto::order_placed_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
