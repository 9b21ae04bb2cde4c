//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! Shared types live here in mod.rs.

pub mod doc;
mod export;
mod filters;
mod health;
mod links;
mod views;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(error: impl ToString) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: error.to_string() }))
}

pub(crate) fn internal_error(error: impl ToString) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: error.to_string() }))
}

// ── Re-exports ───────────────────────────────────────────────────

pub use export::export;
pub use filters::{filter_points, get_filters, get_options, reset_filters, update_filter};
pub use health::health;
pub use links::links;
pub use views::{clusters, correlation, dashboard, establishments, live_clusters, rules, stats};
