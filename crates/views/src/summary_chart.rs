//! Establishments-by-zone bar chart. Does not react to filters.

use serde::Serialize;

use sagdec_core::{EstablishmentSummary, Zone};

use crate::format::{format_percent, format_thousands};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub top: &'static str,
    pub bottom: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    /// e.g. "Urbana: 1,800 colegios"
    pub title: String,
    /// e.g. "75% del total"
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub zone: Zone,
    pub label: &'static str,
    pub count: u32,
    pub percentage: f64,
    pub gradient: Gradient,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn max_count(&self) -> u32 {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

fn gradient(zone: Zone) -> Gradient {
    match zone {
        Zone::Urban => Gradient { top: "#4CAF50", bottom: "#2E7D32" },
        Zone::Rural => Gradient { top: "#FF5733", bottom: "#C62828" },
    }
}

/// One bar per summary, in input order.
pub fn summary_chart(summaries: &[EstablishmentSummary]) -> BarChart {
    let bars = summaries
        .iter()
        .map(|s| Bar {
            zone: s.zone,
            label: s.zone.label(),
            count: s.count,
            percentage: s.percentage,
            gradient: gradient(s.zone),
            tooltip: Tooltip {
                title: format!("{}: {} colegios", s.zone.label(), format_thousands(s.count.into())),
                subtitle: format!("{} del total", format_percent(s.percentage)),
            },
        })
        .collect();

    BarChart {
        title: "Distribución Geográfica",
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagdec_core::Dataset;

    #[test]
    fn test_one_bar_per_zone_in_order() {
        let dataset = Dataset::with_points(Vec::new());
        let chart = summary_chart(&dataset.establishments);
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].zone, Zone::Urban);
        assert_eq!(chart.bars[0].count, 1800);
        assert_eq!(chart.bars[1].zone, Zone::Rural);
        assert_eq!(chart.max_count(), 1800);
    }

    #[test]
    fn test_tooltip_text() {
        let dataset = Dataset::with_points(Vec::new());
        let chart = summary_chart(&dataset.establishments);
        assert_eq!(chart.bars[0].tooltip.title, "Urbana: 1,800 colegios");
        assert_eq!(chart.bars[0].tooltip.subtitle, "75% del total");
        assert_eq!(chart.bars[1].tooltip.title, "Rural: 604 colegios");
    }

    #[test]
    fn test_gradients() {
        let dataset = Dataset::with_points(Vec::new());
        let chart = summary_chart(&dataset.establishments);
        assert_eq!(chart.bars[0].gradient.top, "#4CAF50");
        assert_eq!(chart.bars[1].gradient.bottom, "#C62828");
    }

    #[test]
    fn test_empty_input() {
        let chart = summary_chart(&[]);
        assert!(chart.bars.is_empty());
        assert_eq!(chart.max_count(), 0);
    }
}
