//! Whole-dashboard composition for one Filter State.

use serde::Serialize;

use sagdec_core::{Dataset, SyntheticPoint};
use sagdec_filter::{apply, selector_options, Dimension, FilterState, Selector};

use crate::cluster_grid::{cluster_grid, ClusterGrid};
use crate::correlation::{correlation_chart, ScatterChart};
use crate::format::format_thousands;
use crate::insights::{live_cluster_shares, LiveClusterShare};
use crate::rules_table::{rules_table, RulesTable};
use crate::statistics::{statistics, StatCard};
use crate::summary_chart::{summary_chart, BarChart};

pub const TITLE: &str = "SAGDEC Analytics Dashboard";
pub const SUBTITLE: &str = "Sistema de Análisis y Gestión de Datos Educativos de Colombia";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub headline: String,
    pub statistics: Vec<StatCard>,
    pub filters: FilterState,
    pub selectors: Vec<Selector>,
    pub establishments: BarChart,
    pub correlation: ScatterChart,
    pub rules: RulesTable,
    pub clusters: ClusterGrid,
    pub live_clusters: Vec<LiveClusterShare>,
    pub total_points: usize,
    pub filtered_points: usize,
    /// Constrained dimensions that had no effect on the points.
    pub ignored_dimensions: Vec<Dimension>,
}

impl DashboardView {
    /// Run the Filter Engine and render every view.
    pub fn compose(dataset: &Dataset, state: &FilterState) -> Self {
        let filtered = apply(&dataset.points, state);
        Self::from_filtered(dataset, state, &filtered)
    }

    /// Render every view from points already filtered for `state`.
    pub fn from_filtered(dataset: &Dataset, state: &FilterState, filtered: &[&SyntheticPoint]) -> Self {
        let establishments: u64 = dataset.establishments.iter().map(|e| u64::from(e.count)).sum();

        tracing::debug!(
            total = dataset.point_count(),
            filtered = filtered.len(),
            active = ?state.active_dimensions(),
            "Composing dashboard"
        );

        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            headline: format!(
                "Análisis de {} establecimientos educativos para identificar brechas, \
                 patrones y oportunidades de mejora en el sistema educativo colombiano.",
                format_thousands(establishments)
            ),
            statistics: statistics(&dataset.statistics),
            filters: *state,
            selectors: selector_options()
                .into_iter()
                .map(|s| s.with_current(state))
                .collect(),
            establishments: summary_chart(&dataset.establishments),
            correlation: correlation_chart(filtered.iter().copied()),
            rules: rules_table(&dataset.rules),
            clusters: cluster_grid(&dataset.clusters, state),
            live_clusters: live_cluster_shares(filtered.iter().copied(), &dataset.clusters),
            total_points: dataset.point_count(),
            filtered_points: filtered.len(),
            ignored_dimensions: state.ignored_dimensions(),
        }
    }
}
