//! Frequencies computed from the point collection itself.
//!
//! The cluster definitions carry authored shares; these are the shares
//! actually observed in whichever points are passed in, reported beside them.

use std::collections::BTreeMap;

use serde::Serialize;

use sagdec_core::{ClusterDefinition, ClusterId, SyntheticPoint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveClusterShare {
    pub id: ClusterId,
    pub count: usize,
    /// Share of the given points, 0..=100 (0 when no points).
    pub percentage: f64,
    /// Authored share from the cluster definitions, if the id has one.
    pub authored_percentage: Option<f64>,
}

/// Count points per cluster. Ids 1..=8 always appear (possibly with zero);
/// any other id found in the points is appended in ascending order.
pub fn live_cluster_shares<'a, I>(points: I, definitions: &[ClusterDefinition]) -> Vec<LiveClusterShare>
where
    I: IntoIterator<Item = &'a SyntheticPoint>,
{
    let mut counts: BTreeMap<ClusterId, usize> = ClusterId::defined().map(|id| (id, 0)).collect();
    let mut total = 0usize;
    for point in points {
        *counts.entry(point.cluster).or_insert(0) += 1;
        total += 1;
    }

    counts
        .into_iter()
        .map(|(id, count)| LiveClusterShare {
            id,
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
            authored_percentage: definitions
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.percentage_share),
        })
        .collect()
}
