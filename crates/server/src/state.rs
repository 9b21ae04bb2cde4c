use std::sync::Arc;

use tokio::sync::RwLock;

use sagdec_core::config::LinksConfig;
use sagdec_core::{Dataset, SyntheticPoint};
use sagdec_filter::{FilterCache, FilterState};

/// Shared server state. The dataset never changes after start-up; the
/// Filter State is the only mutable piece and is replaced one field at a time.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub filters: RwLock<FilterState>,
    pub cache: FilterCache,
    pub links: LinksConfig,
}

impl AppState {
    pub fn new(dataset: Dataset, cache_entries: usize, links: LinksConfig) -> Self {
        let cache = FilterCache::new(dataset.points.clone(), cache_entries);
        Self {
            dataset: Arc::new(dataset),
            filters: RwLock::new(FilterState::default()),
            cache,
            links,
        }
    }

    /// Snapshot of the current Filter State.
    pub async fn current_filters(&self) -> FilterState {
        *self.filters.read().await
    }

    /// Points matching `state`, in collection order.
    pub fn filtered(&self, state: &FilterState) -> Vec<&SyntheticPoint> {
        self.cache.filtered(state)
    }
}
