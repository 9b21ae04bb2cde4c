//! Association-rule table with confidence tiers and impact tones.

use serde::Serialize;

use sagdec_core::{AssociationRule, Impact};

use crate::format::{format_percent, format_ratio};

/// Badge tier for a rule's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Strong,
    Moderate,
    Weak,
}

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

/// `> 0.80` strong, `> 0.60` moderate, otherwise weak. Both bounds are strict.
pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence > 0.80 {
        ConfidenceTier::Strong
    } else if confidence > 0.60 {
        ConfidenceTier::Moderate
    } else {
        ConfidenceTier::Weak
    }
}

pub fn impact_tone(impact: Impact) -> Tone {
    match impact {
        Impact::High => Tone::Red,
        Impact::Medium => Tone::Yellow,
        Impact::Low => Tone::Green,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRow {
    pub antecedent: String,
    pub consequent: String,
    /// e.g. "67.7%"
    pub support: String,
    /// e.g. "0.90"
    pub confidence: String,
    pub confidence_tier: ConfidenceTier,
    pub lift: String,
    pub impact: Impact,
    pub impact_label: &'static str,
    pub impact_tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulesTable {
    pub title: &'static str,
    pub columns: [&'static str; 6],
    pub rows: Vec<RuleRow>,
}

/// Rows in the order the rules were authored; never re-sorted.
pub fn rules_table(rules: &[AssociationRule]) -> RulesTable {
    let rows = rules
        .iter()
        .map(|r| RuleRow {
            antecedent: r.antecedent.clone(),
            consequent: r.consequent.clone(),
            support: format_percent(r.support),
            confidence: format_ratio(r.confidence),
            confidence_tier: confidence_tier(r.confidence),
            lift: format_ratio(r.lift),
            impact: r.impact,
            impact_label: r.impact.label(),
            impact_tone: impact_tone(r.impact),
        })
        .collect();

    RulesTable {
        title: "Reglas de Asociación Significativas",
        columns: ["Antecedente", "Consecuente", "Soporte (%)", "Confianza", "Lift", "Impacto"],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagdec_core::Dataset;

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(confidence_tier(0.90), ConfidenceTier::Strong);
        assert_eq!(confidence_tier(0.72), ConfidenceTier::Moderate);
        assert_eq!(confidence_tier(0.68), ConfidenceTier::Moderate);
        assert_eq!(confidence_tier(0.50), ConfidenceTier::Weak);
    }

    #[test]
    fn test_confidence_tier_boundaries_are_strict() {
        assert_eq!(confidence_tier(0.80), ConfidenceTier::Moderate);
        assert_eq!(confidence_tier(0.60), ConfidenceTier::Weak);
        assert_eq!(confidence_tier(0.8000001), ConfidenceTier::Strong);
    }

    #[test]
    fn test_impact_tones() {
        assert_eq!(impact_tone(Impact::High), Tone::Red);
        assert_eq!(impact_tone(Impact::Medium), Tone::Yellow);
        assert_eq!(impact_tone(Impact::Low), Tone::Green);
    }

    #[test]
    fn test_rows_keep_author_order() {
        let dataset = Dataset::with_points(Vec::new());
        let table = rules_table(&dataset.rules);
        let antecedents: Vec<&str> = table.rows.iter().map(|r| r.antecedent.as_str()).collect();
        let expected: Vec<&str> = dataset.rules.iter().map(|r| r.antecedent.as_str()).collect();
        assert_eq!(antecedents, expected);
    }

    #[test]
    fn test_does_not_resort() {
        let dataset = Dataset::with_points(Vec::new());
        let mut reversed = dataset.rules.clone();
        reversed.reverse();
        let table = rules_table(&reversed);
        assert_eq!(table.rows[0].antecedent, "Múltiples sedes");
    }

    #[test]
    fn test_row_formatting() {
        let dataset = Dataset::with_points(Vec::new());
        let row = &rules_table(&dataset.rules).rows[0];
        assert_eq!(row.support, "67.7%");
        assert_eq!(row.confidence, "0.90");
        assert_eq!(row.lift, "1.20");
        assert_eq!(row.confidence_tier, ConfidenceTier::Strong);
        assert_eq!(row.impact_label, "Alto");
    }
}
