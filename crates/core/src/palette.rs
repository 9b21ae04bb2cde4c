//! Cluster colour table used by the correlation chart and cluster cards.

use crate::model::ClusterId;

/// Neutral colour for points whose cluster has no table entry.
pub const DEFAULT_POINT_COLOR: &str = "#8884d8";

const CLUSTER_COLORS: [(u8, &str); 8] = [
    (1, "#FF6384"),
    (2, "#36A2EB"),
    (3, "#FFCE56"),
    (4, "#4BC0C0"),
    (5, "#9966FF"),
    (6, "#FF9F40"),
    (7, "#66BB6A"),
    (8, "#B0BEC5"),
];

/// Table entry for `id`, if any.
pub fn lookup(id: ClusterId) -> Option<&'static str> {
    CLUSTER_COLORS
        .iter()
        .find(|(known, _)| *known == id.0)
        .map(|(_, color)| *color)
}

/// Display colour for a cluster, falling back to [`DEFAULT_POINT_COLOR`].
pub fn cluster_color(id: ClusterId) -> &'static str {
    match lookup(id) {
        Some(color) => color,
        None => {
            tracing::debug!(cluster = id.0, "No colour for cluster, using default");
            DEFAULT_POINT_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_defined_cluster_has_a_color() {
        for id in ClusterId::defined() {
            assert!(lookup(id).is_some(), "missing colour for {id}");
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(cluster_color(ClusterId(1)), "#FF6384");
        assert_eq!(cluster_color(ClusterId(8)), "#B0BEC5");
    }

    #[test]
    fn test_unknown_cluster_falls_back() {
        assert_eq!(cluster_color(ClusterId(0)), DEFAULT_POINT_COLOR);
        assert_eq!(cluster_color(ClusterId(9)), DEFAULT_POINT_COLOR);
        assert_eq!(cluster_color(ClusterId(255)), DEFAULT_POINT_COLOR);
    }
}
