//! Sites-vs-stratum scatter chart over the filtered points, coloured by cluster.

use serde::Serialize;

use sagdec_core::palette::cluster_color;
use sagdec_core::{ClusterId, Stratum, SyntheticPoint};

/// Display rescaling applied to the normalised site count.
pub const SITES_DISPLAY_FACTOR: f64 = 10.0;
pub const POINT_OPACITY: f64 = 0.8;

/// Read-only hover detail for one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointDetail {
    pub cluster: ClusterId,
    pub zone: &'static str,
    pub stratum: Stratum,
    /// Sites rescaled for display, one decimal: "4.2".
    pub sites_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub cluster: ClusterId,
    pub color: &'static str,
    pub opacity: f64,
    pub detail: PointDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_domain: [u8; 2],
    pub points: Vec<ScatterPoint>,
}

impl PointDetail {
    pub fn of(point: &SyntheticPoint) -> Self {
        Self {
            cluster: point.cluster,
            zone: point.zone.label(),
            stratum: point.stratum,
            sites_display: format!("{:.1}", point.sites * SITES_DISPLAY_FACTOR),
        }
    }
}

/// Plot the given (already filtered) points in order.
pub fn correlation_chart<'a, I>(points: I) -> ScatterChart
where
    I: IntoIterator<Item = &'a SyntheticPoint>,
{
    let points = points
        .into_iter()
        .map(|p| ScatterPoint {
            x: p.sites,
            y: p.stratum.value(),
            cluster: p.cluster,
            color: cluster_color(p.cluster),
            opacity: POINT_OPACITY,
            detail: PointDetail::of(p),
        })
        .collect();

    ScatterChart {
        title: "Análisis de Correlación",
        x_label: "Número de Sedes (normalizado)",
        y_label: "Estrato",
        y_domain: [Stratum::MIN, Stratum::MAX],
        points,
    }
}
