//! Filter State endpoints: read, replace one dimension, reset, and
//! stateless evaluation of an arbitrary state.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sagdec_core::SyntheticPoint;
use sagdec_filter::{selector_options, Dimension, FilterState, FilterUpdate, Selector, UNFILTERED_TOKEN};

use crate::state::AppState;

use super::{bad_request, ApiError, ErrorResponse};

#[derive(Serialize)]
pub struct FiltersResponse {
    pub filters: FilterState,
    pub active: Vec<Dimension>,
    /// Set, but without effect on which points match.
    pub ignored: Vec<Dimension>,
}

impl FiltersResponse {
    fn of(filters: FilterState) -> Self {
        Self {
            active: filters.active_dimensions(),
            ignored: filters.ignored_dimensions(),
            filters,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateFilterRequest {
    /// Selector token; a string, a number, or `null` for unfiltered.
    #[serde(default)]
    #[schema(value_type = String)]
    pub value: serde_json::Value,
}

impl UpdateFilterRequest {
    fn token(&self) -> String {
        match &self.value {
            serde_json::Value::Null => UNFILTERED_TOKEN.to_string(),
            serde_json::Value::String(s) => s.clone(),
            // Same rendering as body deserialization: `3.0` reads as `3`.
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(|f| f.to_string())
                .unwrap_or_else(|| n.to_string()),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct UpdateFilterResponse {
    #[serde(flatten)]
    pub update: FilterUpdate,
    pub filters: FilterState,
    pub ignored: Vec<Dimension>,
}

#[derive(Serialize)]
pub struct FilteredPointsResponse {
    pub filters: FilterState,
    pub total: usize,
    pub count: usize,
    pub points: Vec<SyntheticPoint>,
}

/// Current filters
#[utoipa::path(
    get,
    path = "/api/filters",
    tag = "Filters",
    responses(
        (status = 200, description = "Current Filter State", body = Object)
    )
)]
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    Json(FiltersResponse::of(state.current_filters().await))
}

/// Selector options
///
/// The five selectors with their options and current value.
#[utoipa::path(
    get,
    path = "/api/filters/options",
    tag = "Filters",
    responses(
        (status = 200, description = "Selector metadata", body = Object)
    )
)]
pub async fn get_options(State(state): State<Arc<AppState>>) -> Json<Vec<Selector>> {
    let filters = state.current_filters().await;
    Json(
        selector_options()
            .into_iter()
            .map(|s| s.with_current(&filters))
            .collect(),
    )
}

/// Replace one dimension
///
/// Tokens that name no known value are treated as unfiltered and
/// reported with `recognized: false`.
#[utoipa::path(
    put,
    path = "/api/filters/{dimension}",
    tag = "Filters",
    params(("dimension" = String, Path, description = "zone, authority, stratum, cluster or shift")),
    request_body = UpdateFilterRequest,
    responses(
        (status = 200, description = "Updated Filter State", body = Object),
        (status = 400, description = "Unknown dimension", body = ErrorResponse)
    )
)]
pub async fn update_filter(
    State(state): State<Arc<AppState>>,
    Path(dimension): Path<String>,
    Json(req): Json<UpdateFilterRequest>,
) -> Result<Json<UpdateFilterResponse>, ApiError> {
    let dimension = FilterState::parse_dimension(&dimension).map_err(bad_request)?;
    let token = req.token();

    let (update, filters) = {
        let mut filters = state.filters.write().await;
        let update = filters.set(dimension, &token);
        (update, *filters)
    };
    info!(
        dimension = %update.dimension,
        applied = %update.applied,
        recognized = update.recognized,
        "Filter updated"
    );

    Ok(Json(UpdateFilterResponse {
        update,
        ignored: filters.ignored_dimensions(),
        filters,
    }))
}

/// Reset filters
#[utoipa::path(
    delete,
    path = "/api/filters",
    tag = "Filters",
    responses(
        (status = 200, description = "All dimensions unfiltered", body = Object)
    )
)]
pub async fn reset_filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    let filters = {
        let mut filters = state.filters.write().await;
        *filters = FilterState::default();
        *filters
    };
    info!("Filters reset");
    Json(FiltersResponse::of(filters))
}

/// Evaluate a Filter State
///
/// Stateless: the shared Filter State is neither read nor changed.
#[utoipa::path(
    post,
    path = "/api/points/filter",
    tag = "Filters",
    request_body = Object,
    responses(
        (status = 200, description = "Points matching the given state, in collection order", body = Object)
    )
)]
pub async fn filter_points(
    State(state): State<Arc<AppState>>,
    Json(filters): Json<FilterState>,
) -> Json<FilteredPointsResponse> {
    let points: Vec<SyntheticPoint> = state.filtered(&filters).into_iter().cloned().collect();
    debug!(count = points.len(), active = ?filters.active_dimensions(), "Evaluated filter request");
    Json(FilteredPointsResponse {
        filters,
        total: state.dataset.point_count(),
        count: points.len(),
        points,
    })
}
