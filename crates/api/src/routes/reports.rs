//! Summary report endpoint.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};

use stockroom_infra::ItemStore;
use stockroom_inventory::{report_record, ItemFilter, Report};

use crate::{dto, errors, views};

/// GET /reports/summary?format={html|json|csv} — aggregate over the whole
/// collection and render in the requested format (default html).
pub async fn summary(
    Extension(store): Extension<Arc<dyn ItemStore>>,
    Query(query): Query<dto::ReportQuery>,
) -> axum::response::Response {
    let items = match store.list(&ItemFilter::all()).await {
        Ok(items) => items,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let report = Report::build(&items);

    match query.format().as_str() {
        "csv" => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=report.csv",
                ),
            ],
            report.to_csv(),
        )
            .into_response(),
        "json" => Json(report_record(&report)).into_response(),
        // Anything else (including the default) renders the HTML page.
        _ => Html(views::report_page(&report)).into_response(),
    }
}
