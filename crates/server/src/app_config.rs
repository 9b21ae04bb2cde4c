//! Application configuration and dataset construction.

use tracing::info;

use sagdec_core::Dataset;

use crate::state::AppState;

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> sagdec_core::Config {
    sagdec_core::config::load_dotenv();
    sagdec_core::Config::from_env()
}

/// Build the dataset once and wrap it in the shared state.
pub fn build_app_state(config: &sagdec_core::Config) -> AppState {
    let dataset = Dataset::builtin(&config.dataset);
    info!(
        "Dataset ready: {} establishment summaries, {} points, {} rules, {} clusters",
        dataset.establishments.len(),
        dataset.point_count(),
        dataset.rules.len(),
        dataset.clusters.len()
    );
    AppState::new(dataset, config.cache.filter_cache_entries, config.links.clone())
}
