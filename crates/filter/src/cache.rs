//! Memoised filter results over one immutable point collection.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;
use sagdec_core::SyntheticPoint;

use crate::engine::apply_indices;
use crate::state::FilterState;

/// Bounded cache of Filter Engine results keyed by `FilterState`.
///
/// Stores indices into the shared collection; results are identical to
/// [`crate::apply`] because the collection never changes.
pub struct FilterCache {
    points: Arc<[SyntheticPoint]>,
    entries: Mutex<LruCache<FilterState, Arc<[usize]>>>,
}

impl FilterCache {
    /// `capacity` of zero is raised to one.
    pub fn new(points: Arc<[SyntheticPoint]>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            points,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn points(&self) -> &[SyntheticPoint] {
        &self.points
    }

    /// Indices of matching points, computed at most once per cached state.
    pub fn indices(&self, state: &FilterState) -> Arc<[usize]> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(state) {
            tracing::debug!(matched = hit.len(), "Filter cache hit");
            return hit.clone();
        }
        let computed: Arc<[usize]> = apply_indices(&self.points, state).into();
        tracing::debug!(matched = computed.len(), total = self.points.len(), "Filter cache miss");
        entries.put(*state, computed.clone());
        computed
    }

    /// Matching points, in collection order.
    pub fn filtered(&self, state: &FilterState) -> Vec<&SyntheticPoint> {
        self.indices(state).iter().map(|&i| &self.points[i]).collect()
    }

    /// Number of cached states.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
