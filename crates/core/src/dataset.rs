//! The dashboard dataset, built once at start-up and handed to the views.

use std::sync::Arc;

use serde::Serialize;

use crate::config::DatasetConfig;
use crate::model::{
    AssociationRule, ClusterDefinition, ClusterId, EstablishmentSummary, IconRef, Impact,
    SummaryStatistic, SyntheticPoint, Zone,
};
use crate::synthetic::generate_points;

/// Immutable dataset. Cloning is cheap: the point collection is shared.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub establishments: Vec<EstablishmentSummary>,
    pub points: Arc<[SyntheticPoint]>,
    pub rules: Vec<AssociationRule>,
    pub clusters: Vec<ClusterDefinition>,
    pub statistics: Vec<SummaryStatistic>,
}

impl Dataset {
    /// Literal records plus a seeded synthetic point collection.
    pub fn builtin(config: &DatasetConfig) -> Self {
        let points = generate_points(config.seed, config.point_count);
        tracing::info!(
            seed = config.seed,
            points = points.len(),
            "Generated synthetic point collection"
        );
        Self::with_points(points)
    }

    /// Literal records plus the given points.
    pub fn with_points(points: Vec<SyntheticPoint>) -> Self {
        Self {
            establishments: establishments(),
            points: points.into(),
            rules: rules(),
            clusters: clusters(),
            statistics: statistics(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn cluster(&self, id: ClusterId) -> Option<&ClusterDefinition> {
        self.clusters.iter().find(|c| c.id == id)
    }
}

fn establishments() -> Vec<EstablishmentSummary> {
    vec![
        EstablishmentSummary { zone: Zone::Urban, count: 1800, percentage: 75.0 },
        EstablishmentSummary { zone: Zone::Rural, count: 604, percentage: 25.0 },
    ]
}

fn rule(
    antecedent: &str,
    consequent: &str,
    support: f64,
    confidence: f64,
    lift: f64,
    impact: Impact,
) -> AssociationRule {
    AssociationRule {
        antecedent: antecedent.to_string(),
        consequent: consequent.to_string(),
        support,
        confidence,
        lift,
        impact,
    }
}

// Authored in descending confidence; views keep this order.
fn rules() -> Vec<AssociationRule> {
    vec![
        rule("Niveles educativos", "Sin reservas indígenas", 67.7, 0.90, 1.20, Impact::High),
        rule("Urbana + niveles", "Sin reservas", 48.8, 0.85, 1.10, Impact::High),
        rule("Estrato alto", "Jornada completa", 35.2, 0.78, 1.05, Impact::Medium),
        rule("Rural + básica", "Jornada mañana", 28.4, 0.72, 0.98, Impact::Medium),
        rule("Múltiples sedes", "Zona urbana", 22.1, 0.68, 0.95, Impact::Low),
    ]
}

fn cluster(
    id: u8,
    name: &str,
    percentage_share: f64,
    traits: &str,
    color: &str,
    description: &str,
) -> ClusterDefinition {
    ClusterDefinition {
        id: ClusterId(id),
        name: name.to_string(),
        percentage_share,
        traits: traits.to_string(),
        color: color.to_string(),
        description: description.to_string(),
    }
}

fn clusters() -> Vec<ClusterDefinition> {
    vec![
        cluster(
            1,
            "Pequeños Urbanos Tradicionales",
            63.2,
            "Pequeños, urbanos, modelo tradicional, inglés",
            "#FF6384",
            "Instituciones urbanas de tamaño pequeño con enfoque tradicional",
        ),
        cluster(
            2,
            "Rurales Básicos",
            15.8,
            "Rurales, educación básica, recursos limitados",
            "#36A2EB",
            "Colegios rurales con educación básica y recursos limitados",
        ),
        cluster(
            3,
            "Urbanos Grandes",
            8.4,
            "Múltiples sedes, urbanos, diversa oferta",
            "#FFCE56",
            "Instituciones urbanas grandes con múltiples sedes",
        ),
        cluster(
            4,
            "Técnicos Especializados",
            4.9,
            "Educación técnica, estrato medio-alto",
            "#4BC0C0",
            "Instituciones especializadas en educación técnica",
        ),
        cluster(
            5,
            "Inclusivos Rurales",
            3.2,
            "Rurales, programas de inclusión",
            "#9966FF",
            "Colegios rurales con programas de inclusión social",
        ),
        cluster(
            6,
            "Nocturnos Urbanos",
            2.8,
            "Jornada nocturna, adultos",
            "#FF9F40",
            "Instituciones urbanas con jornada nocturna para adultos",
        ),
        cluster(
            7,
            "Bilingües Premium",
            1.4,
            "Bilingües, estrato alto",
            "#66BB6A",
            "Instituciones bilingües de estrato socioeconómico alto",
        ),
        cluster(
            8,
            "Especializados Únicos",
            0.3,
            "Características únicas, casos especiales",
            "#B0BEC5",
            "Instituciones con características únicas y especiales",
        ),
    ]
}

fn statistics() -> Vec<SummaryStatistic> {
    let stat = |label: &str, value: &str, icon: IconRef, color: &str| SummaryStatistic {
        label: label.to_string(),
        value: value.to_string(),
        icon,
        color: color.to_string(),
    };
    vec![
        stat("Total Establecimientos", "2,404", IconRef::Building, "text-blue-600"),
        stat("Departamentos", "32", IconRef::Globe, "text-green-600"),
        stat("Clusters Identificados", "8", IconRef::Target, "text-purple-600"),
        stat("Reglas de Asociación", "156", IconRef::Award, "text-orange-600"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_builtin_point_count_and_stability() {
        let config = DatasetConfig::default();
        let a = Dataset::builtin(&config);
        let b = Dataset::builtin(&config);
        assert_eq!(a.point_count(), 200);
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_establishment_percentages_sum_to_100() {
        let total: f64 = establishments().iter().map(|e| e.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let count: u32 = establishments().iter().map(|e| e.count).sum();
        assert_eq!(count, 2404);
    }

    #[test]
    fn test_rules_authored_in_descending_confidence() {
        let rules = rules();
        assert_eq!(rules.len(), 5);
        assert!(rules.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_cluster_shares_approximately_100() {
        let total: f64 = clusters().iter().map(|c| c.percentage_share).sum();
        assert!((total - 100.0).abs() < 0.5, "total = {total}");
    }

    #[test]
    fn test_cluster_colors_match_palette() {
        for c in clusters() {
            assert_eq!(palette::lookup(c.id), Some(c.color.as_str()));
        }
    }

    #[test]
    fn test_cluster_lookup() {
        let dataset = Dataset::with_points(Vec::new());
        assert_eq!(dataset.cluster(ClusterId(3)).map(|c| c.name.as_str()), Some("Urbanos Grandes"));
        assert!(dataset.cluster(ClusterId(9)).is_none());
        assert_eq!(dataset.statistics.len(), 4);
    }
}
