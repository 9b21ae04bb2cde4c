use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Targets for the "view notebook" and "source code" buttons.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LinksResponse {
    pub notebook_url: Option<String>,
    pub source_url: Option<String>,
}

/// External links
///
/// `null` when a link is not configured.
#[utoipa::path(
    get,
    path = "/api/links",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Configured external links", body = LinksResponse)
    )
)]
pub async fn links(State(state): State<Arc<AppState>>) -> Json<LinksResponse> {
    Json(LinksResponse {
        notebook_url: state.links.notebook_url.clone(),
        source_url: state.links.source_url.clone(),
    })
}
