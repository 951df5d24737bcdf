use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::routes::reviews;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:sku", get(get_product))
        .route("/:sku/restock", post(restock_product))
        .route("/:sku/reviews", get(reviews::get_reviews).post(reviews::add_review))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.shop().list_products())).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match services.shop().get_product(&sku) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn restock_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
    body: Result<Json<dto::RestockRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let quantity = match body.quantity() {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.shop().restock(&sku, quantity) {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "success", "product": product })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
