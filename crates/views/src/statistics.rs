//! Summary statistic cards.

use serde::Serialize;

use sagdec_core::{IconRef, SummaryStatistic};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub icon: IconRef,
    pub color: String,
    /// Gradient classes for the icon badge.
    pub background: &'static str,
}

fn background(color: &str) -> &'static str {
    match color {
        "text-blue-600" => "from-blue-100 to-blue-200",
        "text-green-600" => "from-green-100 to-green-200",
        "text-purple-600" => "from-purple-100 to-purple-200",
        _ => "from-orange-100 to-orange-200",
    }
}

pub fn statistics(stats: &[SummaryStatistic]) -> Vec<StatCard> {
    stats
        .iter()
        .map(|s| StatCard {
            label: s.label.clone(),
            value: s.value.clone(),
            icon: s.icon,
            color: s.color.clone(),
            background: background(&s.color),
        })
        .collect()
}
