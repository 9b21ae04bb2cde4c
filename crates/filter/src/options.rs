//! Selector metadata: labels and option tokens for each dimension.

use serde::Serialize;

use sagdec_core::{Authority, ClusterId, Shift, Stratum, Zone};

use crate::state::{Dimension, FilterState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOption {
    /// Token sent back when this option is picked.
    pub value: String,
    /// Text shown in the dropdown.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    pub dimension: Dimension,
    pub label: &'static str,
    pub options: Vec<SelectorOption>,
    /// Currently applied token, set by [`Selector::with_current`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl Selector {
    fn new(dimension: Dimension, label: &'static str, sentinel: &str) -> Self {
        Self {
            dimension,
            label,
            options: vec![SelectorOption {
                value: sentinel.to_string(),
                label: sentinel.to_string(),
            }],
            current: None,
        }
    }

    fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectorOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Attach the option value matching the state's selection for this
    /// dimension (the sentinel option when unfiltered).
    pub fn with_current(mut self, state: &FilterState) -> Self {
        let applied = state.token(self.dimension);
        let current = self
            .options
            .iter()
            .find(|opt| {
                let mut probe = FilterState::new();
                probe.set(self.dimension, &opt.value);
                probe.token(self.dimension) == applied
            })
            .map(|opt| opt.value.clone())
            .unwrap_or(applied);
        self.current = Some(current);
        self
    }
}

/// The five dashboard selectors, in display order.
pub fn selector_options() -> Vec<Selector> {
    let mut zone = Selector::new(Dimension::Zone, "Zona Geográfica", "Todas");
    for z in Zone::ALL {
        zone = zone.option(z.label(), z.label());
    }

    let mut authority = Selector::new(Dimension::Authority, "Secretaría de Educación", "Todas");
    for a in Authority::ALL {
        authority = authority.option(a.label(), a.label());
    }

    let mut stratum = Selector::new(Dimension::Stratum, "Estrato Socioeconómico", "Todos");
    for s in Stratum::all() {
        stratum = stratum.option(s.to_string(), format!("Estrato {s}"));
    }

    let mut cluster = Selector::new(Dimension::Cluster, "Cluster de Análisis", "Todos");
    for c in ClusterId::defined() {
        cluster = cluster.option(c.to_string(), format!("Cluster {c}"));
    }

    let mut shift = Selector::new(Dimension::Shift, "Jornada Académica", "Todas");
    for s in Shift::ALL {
        shift = shift.option(s.label(), s.label());
    }

    vec![zone, authority, stratum, cluster, shift]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    #[test]
    fn test_five_selectors_in_order() {
        let dims: Vec<Dimension> = selector_options().iter().map(|s| s.dimension).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_option_counts() {
        let counts: Vec<usize> = selector_options().iter().map(|s| s.options.len()).collect();
        assert_eq!(counts, vec![3, 6, 7, 9, 4]);
    }

    #[test]
    fn test_labels_for_numeric_selectors() {
        let selectors = selector_options();
        assert_eq!(selectors[2].options[1].label, "Estrato 1");
        assert_eq!(selectors[3].options[3].value, "3");
        assert_eq!(selectors[3].options[3].label, "Cluster 3");
    }

    #[test]
    fn test_every_option_value_parses_back() {
        for selector in selector_options() {
            for opt in &selector.options {
                let mut state = FilterState::new();
                let update = state.set(selector.dimension, &opt.value);
                assert!(update.recognized, "{} = {}", selector.dimension, opt.value);
            }
        }
    }

    #[test]
    fn test_with_current() {
        let state = FilterState {
            cluster: Selection::Only(ClusterId(5)),
            ..FilterState::default()
        };
        let cluster = selector_options().remove(3).with_current(&state);
        assert_eq!(cluster.current.as_deref(), Some("5"));
    }

    #[test]
    fn test_with_current_uses_option_values() {
        let state = FilterState::new().zone(Zone::Urban);
        let selectors: Vec<Selector> = selector_options()
            .into_iter()
            .map(|s| s.with_current(&state))
            .collect();
        assert_eq!(selectors[0].current.as_deref(), Some("Urbana"));
        assert_eq!(selectors[1].current.as_deref(), Some("Todas"));
        assert_eq!(selectors[2].current.as_deref(), Some("Todos"));
    }
}
