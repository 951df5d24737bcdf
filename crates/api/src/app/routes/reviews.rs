use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use storefront_reviews::AddReview;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn get_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match services.shop().get_reviews(&sku) {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_review(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
    body: Result<Json<dto::AddReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    // Unknown SKUs are reported as 404 whatever is wrong with the body.
    if let Err(e) = services.shop().get_product(&sku) {
        return errors::domain_error_to_response(e);
    }

    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let cmd = match body
        .rating()
        .and_then(|rating| AddReview::parse(&sku, rating, body.comment.as_deref(), Utc::now()))
    {
        Ok(cmd) => cmd,
        Err(e) => {
            tracing::warn!(%sku, error = %e, "review rejected");
            return errors::domain_error_to_response(e);
        }
    };

    match services.shop().add_review(cmd) {
        Ok(summary) => (StatusCode::CREATED, Json(dto::review_added_to_json(&summary))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
