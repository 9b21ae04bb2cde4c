//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// CORS layer for the configured origin; `*` allows any origin.
pub fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin, allowing any origin");
            CorsLayer::permissive()
        }
    }
}

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, cors_origin: &str) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/filters", get(api::get_filters).delete(api::reset_filters))
        // Static segment wins over the {dimension} capture.
        .route("/api/filters/options", get(api::get_options))
        .route("/api/filters/{dimension}", put(api::update_filter))
        .route("/api/points/filter", post(api::filter_points))
        .route("/api/charts/establishments", get(api::establishments))
        .route("/api/charts/correlation", get(api::correlation))
        .route("/api/rules", get(api::rules))
        .route("/api/clusters", get(api::clusters))
        .route("/api/clusters/live", get(api::live_clusters))
        .route("/api/stats", get(api::stats))
        .route("/api/dashboard", get(api::dashboard))
        .route("/api/export", get(api::export))
        .route("/api/links", get(api::links))
        .route("/api-docs/openapi.json", get(api::doc::openapi_json))
        .layer(cors_layer(cors_origin))
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
