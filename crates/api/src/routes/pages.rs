//! Server-rendered HTML endpoints (listing, create form, edit form).

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::{Html, IntoResponse},
    Form,
};

use stockroom_core::{DomainError, ItemId};
use stockroom_infra::ItemStore;
use stockroom_inventory::{Item, ItemFilter};

use crate::routes::redirect_to_listing;
use crate::{dto, errors, views};

fn distinct_categories(items: &[Item]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if let Some(c) = item.category() {
            if !categories.iter().any(|known| known == c) {
                categories.push(c.to_string());
            }
        }
    }
    categories
}

async fn render_listing(
    store: &Arc<dyn ItemStore>,
    filter: &ItemFilter,
    error: Option<&str>,
) -> axum::response::Response {
    match store.list(filter).await {
        Ok(items) => {
            let categories = distinct_categories(&items);
            Html(views::listing_page(&items, &categories, error)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET / — HTML listing; filters apply just like the JSON endpoint.
pub async fn index(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    render_listing(&store, &query.into_filter(), None).await
}

/// GET /manage_items — unfiltered listing with the create form.
pub async fn manage_items(
    Extension(store): Extension<Arc<dyn ItemStore>>,
) -> axum::response::Response {
    render_listing(&store, &ItemFilter::all(), None).await
}

/// POST /manage_items — create from the form; validation problems re-render
/// the listing with an inline error instead of a bare 4xx.
pub async fn create_from_form(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let fields = match form.into_draft().validate() {
        Ok(fields) => fields,
        Err(e) if e.is_client_error() => {
            return render_listing(&store, &ItemFilter::all(), Some(&e.to_string())).await;
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.create(fields).await {
        Ok(_) => redirect_to_listing(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /items/{id} — edit form for one item.
pub async fn edit_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match store.get(ItemId::new(id)).await {
        Ok(item) => Html(views::edit_form_page(&views::EditForm::from_item(&item), None))
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST/PUT /items/{id} — full-overwrite update from the form. On success,
/// 302 to the listing; on a client error the form is re-rendered inline
/// with the values the user submitted.
pub async fn update_item(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Path(id): Path<i64>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let id = ItemId::new(id);

    // Existence check up front: a bad form on a missing item is still 404.
    if let Err(e) = store.get(id).await {
        return errors::domain_error_to_response(e);
    }

    let draft = form.into_draft();
    let fields = match draft.clone().validate() {
        Ok(fields) => fields,
        Err(e) if e.is_client_error() => {
            let form = views::EditForm::from_submission(id, &draft);
            return Html(views::edit_form_page(&form, Some(&e.to_string()))).into_response();
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.update(id, fields).await {
        Ok(_) => redirect_to_listing(),
        Err(e @ DomainError::Storage(_)) => {
            // Rolled back; keep the submission on screen with the error.
            let form = views::EditForm::from_submission(id, &draft);
            Html(views::edit_form_page(&form, Some(&e.to_string()))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
