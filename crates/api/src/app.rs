use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Router};

use stockroom_infra::ItemStore;

use crate::routes::{items, pages, reports};

/// Assemble the router over any store implementation.
///
/// The store handle is the only shared state; handlers receive it via
/// `Extension`.
pub fn build_app(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::index))
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(pages::edit_item)
                .post(pages::update_item)
                .put(pages::update_item),
        )
        .route("/items/:id/delete", get(items::delete_item))
        .route("/reports/summary", get(reports::summary))
        .route(
            "/manage_items",
            get(pages::manage_items).post(pages::create_from_form),
        )
        .layer(Extension(store))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
