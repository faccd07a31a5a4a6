use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

pub mod items;
pub mod pages;
pub mod reports;

/// 302 back to the listing page, matching the form-driven flow.
pub fn redirect_to_listing() -> axum::response::Response {
    (StatusCode::FOUND, [(header::LOCATION, "/manage_items")]).into_response()
}
