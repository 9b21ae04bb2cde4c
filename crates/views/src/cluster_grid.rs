//! Cluster card grid. A card is emphasised when the cluster filter names it.

use serde::Serialize;

use sagdec_core::{ClusterDefinition, ClusterId};
use sagdec_filter::{FilterState, Selection};

use crate::format::format_percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterCard {
    pub id: ClusterId,
    pub heading: String,
    pub name: String,
    pub share: String,
    pub description: String,
    pub traits: String,
    pub color: String,
    /// Width of the share bar, 0..=100.
    pub bar_width: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterGrid {
    pub title: &'static str,
    pub cards: Vec<ClusterCard>,
}

impl ClusterGrid {
    pub fn selected(&self) -> Option<&ClusterCard> {
        self.cards.iter().find(|c| c.selected)
    }
}

/// Cards are indicators only; selecting one is done through the filter.
pub fn cluster_grid(clusters: &[ClusterDefinition], state: &FilterState) -> ClusterGrid {
    let cards = clusters
        .iter()
        .map(|c| ClusterCard {
            id: c.id,
            heading: format!("Cluster {}", c.id),
            name: c.name.clone(),
            share: format_percent(c.percentage_share),
            description: c.description.clone(),
            traits: format!("Características: {}", c.traits),
            color: c.color.clone(),
            bar_width: c.percentage_share.clamp(0.0, 100.0),
            selected: state.cluster == Selection::Only(c.id),
        })
        .collect();

    ClusterGrid {
        title: "Análisis de Clusters Educativos",
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagdec_core::{Authority, Dataset, Stratum, Zone};

    fn clusters() -> Vec<ClusterDefinition> {
        Dataset::with_points(Vec::new()).clusters
    }

    #[test]
    fn test_no_selection_when_unfiltered() {
        let grid = cluster_grid(&clusters(), &FilterState::new());
        assert_eq!(grid.cards.len(), 8);
        assert!(grid.selected().is_none());
    }

    #[test]
    fn test_selected_card_follows_cluster_filter() {
        let grid = cluster_grid(&clusters(), &FilterState::new().cluster(ClusterId(3)));
        let selected: Vec<ClusterId> = grid.cards.iter().filter(|c| c.selected).map(|c| c.id).collect();
        assert_eq!(selected, vec![ClusterId(3)]);
        assert_eq!(grid.selected().map(|c| c.name.as_str()), Some("Urbanos Grandes"));
    }

    #[test]
    fn test_other_dimensions_do_not_select() {
        let state = FilterState::new()
            .zone(Zone::Rural)
            .authority(Authority::Valle)
            .stratum(Stratum::new(2).unwrap());
        assert!(cluster_grid(&clusters(), &state).selected().is_none());
    }

    #[test]
    fn test_cluster_without_card_selects_nothing() {
        let grid = cluster_grid(&clusters(), &FilterState::new().cluster(ClusterId(9)));
        assert!(grid.selected().is_none());
    }

    #[test]
    fn test_card_text() {
        let grid = cluster_grid(&clusters(), &FilterState::new());
        let first = &grid.cards[0];
        assert_eq!(first.heading, "Cluster 1");
        assert_eq!(first.share, "63.2%");
        assert_eq!(first.bar_width, 63.2);
        assert!(first.traits.starts_with("Características: "));
    }
}
