//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SAGDEC analytics API",
        version = "0.1.0",
        description = "Filterable analytics over Colombian educational establishments: zone summary, sites/stratum correlation, association rules, and clusters.",
    ),
    tags(
        (name = "Health", description = "Server readiness"),
        (name = "Filters", description = "Filter State reads, updates, and stateless evaluation"),
        (name = "Dashboard", description = "Charts, rules, clusters, statistics, export, and links"),
    ),
    paths(
        // Health
        crate::api::health::health,
        // Filters
        crate::api::filters::get_filters,
        crate::api::filters::get_options,
        crate::api::filters::update_filter,
        crate::api::filters::reset_filters,
        crate::api::filters::filter_points,
        // Dashboard
        crate::api::views::establishments,
        crate::api::views::correlation,
        crate::api::views::rules,
        crate::api::views::clusters,
        crate::api::views::live_clusters,
        crate::api::views::stats,
        crate::api::views::dashboard,
        crate::api::export::export,
        crate::api::links::links,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::links::LinksResponse,
        crate::api::filters::UpdateFilterRequest,
    ))
)]
pub struct ApiDoc;

/// Raw OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
