//! View models for the dashboard: each view is a pure function over the
//! dataset literals and, where it reacts to filters, the Filter State.

pub mod cluster_grid;
pub mod correlation;
pub mod dashboard;
pub mod export;
pub mod format;
pub mod insights;
pub mod rules_table;
pub mod statistics;
pub mod summary_chart;

pub use cluster_grid::{cluster_grid, ClusterCard, ClusterGrid};
pub use correlation::{correlation_chart, PointDetail, ScatterChart, ScatterPoint};
pub use dashboard::DashboardView;
pub use export::ExportDocument;
pub use insights::{live_cluster_shares, LiveClusterShare};
pub use rules_table::{confidence_tier, impact_tone, rules_table, ConfidenceTier, RuleRow, RulesTable, Tone};
pub use statistics::{statistics, StatCard};
pub use summary_chart::{summary_chart, Bar, BarChart};
