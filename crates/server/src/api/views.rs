//! Read-only view endpoints. Filter-reactive views read the shared
//! Filter State and evaluate it through the cache.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use sagdec_views::{
    cluster_grid, correlation_chart, live_cluster_shares, rules_table, statistics, summary_chart,
    BarChart, ClusterGrid, DashboardView, LiveClusterShare, RulesTable, ScatterChart, StatCard,
};

use crate::state::AppState;

/// Establishments by zone
#[utoipa::path(
    get,
    path = "/api/charts/establishments",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Bar chart of establishments per zone", body = Object)
    )
)]
pub async fn establishments(State(state): State<Arc<AppState>>) -> Json<BarChart> {
    Json(summary_chart(&state.dataset.establishments))
}

/// Sites vs stratum scatter
///
/// Only points passing the current Filter State are plotted.
#[utoipa::path(
    get,
    path = "/api/charts/correlation",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Scatter chart of the filtered points", body = Object)
    )
)]
pub async fn correlation(State(state): State<Arc<AppState>>) -> Json<ScatterChart> {
    let filters = state.current_filters().await;
    let filtered = state.filtered(&filters);
    Json(correlation_chart(filtered))
}

/// Association rules
#[utoipa::path(
    get,
    path = "/api/rules",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Rules table with confidence tiers", body = Object)
    )
)]
pub async fn rules(State(state): State<Arc<AppState>>) -> Json<RulesTable> {
    Json(rules_table(&state.dataset.rules))
}

/// Cluster cards
#[utoipa::path(
    get,
    path = "/api/clusters",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cluster grid; the selected cluster is marked", body = Object)
    )
)]
pub async fn clusters(State(state): State<Arc<AppState>>) -> Json<ClusterGrid> {
    let filters = state.current_filters().await;
    Json(cluster_grid(&state.dataset.clusters, &filters))
}

/// Live cluster shares
///
/// Cluster membership counted over the filtered points, beside the
/// authored percentage shares.
#[utoipa::path(
    get,
    path = "/api/clusters/live",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Per-cluster counts over the filtered points", body = Object)
    )
)]
pub async fn live_clusters(State(state): State<Arc<AppState>>) -> Json<Vec<LiveClusterShare>> {
    let filters = state.current_filters().await;
    let filtered = state.filtered(&filters);
    Json(live_cluster_shares(filtered, &state.dataset.clusters))
}

/// Summary statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Headline statistic cards", body = Object)
    )
)]
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<Vec<StatCard>> {
    Json(statistics(&state.dataset.statistics))
}

/// Full dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Every view rendered for the current Filter State", body = Object)
    )
)]
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let filters = state.current_filters().await;
    let filtered = state.filtered(&filters);
    Json(DashboardView::from_filtered(&state.dataset, &filters, &filtered))
}
