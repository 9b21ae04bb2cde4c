use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::Response;

use sagdec_views::export::EXPORT_FILENAME;
use sagdec_views::ExportDocument;

use crate::state::AppState;

use super::{internal_error, ApiError, ErrorResponse};

/// Export filtered points
///
/// Downloads the points matching the current Filter State as JSON, with
/// the filter snapshot and a generation timestamp.
#[utoipa::path(
    get,
    path = "/api/export",
    tag = "Dashboard",
    responses(
        (status = 200, description = "JSON attachment", content_type = "application/json"),
        (status = 500, description = "Serialization error", body = ErrorResponse)
    )
)]
pub async fn export(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let filters = state.current_filters().await;
    let filtered = state.filtered(&filters);
    let document = ExportDocument::new(&filters, state.dataset.point_count(), filtered, chrono::Utc::now());
    let body = document.to_json_pretty().map_err(internal_error)?;

    tracing::info!(count = document.count, "Exported filtered points");

    Response::builder()
        .status(200)
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        )
        .body(Body::from(body))
        .map_err(internal_error)
}
