//! JSON item endpoints.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockroom_core::ItemId;
use stockroom_infra::ItemStore;
use stockroom_inventory::item_record;

use crate::routes::redirect_to_listing;
use crate::{dto, errors};

/// POST /items — create from a JSON body, 201 with the stored record.
///
/// The body extractor is taken as a `Result` so a missing or malformed body
/// comes back as a 400 with the same JSON error envelope as validation
/// failures, not axum's default plain-text rejection.
pub async fn create_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text());
        }
    };

    let fields = match body.into_draft().validate() {
        Ok(fields) => fields,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.create(fields).await {
        Ok(item) => (StatusCode::CREATED, Json(item_record(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /items — JSON array, optional `?category=` and `?search=`.
pub async fn list_items(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    match store.list(&query.into_filter()).await {
        Ok(items) => {
            let records: Vec<_> = items.iter().map(item_record).collect();
            Json(records).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /items/{id}/delete — remove and bounce back to the listing.
pub async fn delete_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match store.delete(ItemId::new(id)).await {
        Ok(()) => redirect_to_listing(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
