use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sagdec_core::{Authority, ClusterId, SagdecError, Shift, Stratum, Zone};

use crate::selection::{FilterToken, Selection};

/// A filterable dimension of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Zone,
    Authority,
    Stratum,
    Cluster,
    Shift,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Zone,
        Dimension::Authority,
        Dimension::Stratum,
        Dimension::Cluster,
        Dimension::Shift,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Zone => "zone",
            Dimension::Authority => "authority",
            Dimension::Stratum => "stratum",
            Dimension::Cluster => "cluster",
            Dimension::Shift => "shift",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = SagdecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zone" | "zona" => Ok(Dimension::Zone),
            "authority" | "secretaria" | "secretaría" => Ok(Dimension::Authority),
            "stratum" | "estrato" => Ok(Dimension::Stratum),
            "cluster" => Ok(Dimension::Cluster),
            "shift" | "jornada" => Ok(Dimension::Shift),
            _ => Err(SagdecError::UnknownDimension(s.to_string())),
        }
    }
}

/// Selected filter value per dimension. Default: everything unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(alias = "zona")]
    pub zone: Selection<Zone>,
    #[serde(alias = "secretaria")]
    pub authority: Selection<Authority>,
    #[serde(alias = "estrato")]
    pub stratum: Selection<Stratum>,
    pub cluster: Selection<ClusterId>,
    /// Accepted and kept, but points have no shift: never narrows results.
    #[serde(alias = "jornada")]
    pub shift: Selection<Shift>,
}

/// Outcome of replacing one dimension's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterUpdate {
    pub dimension: Dimension,
    /// Token as received.
    pub token: String,
    /// Value now in effect for the dimension.
    pub applied: String,
    /// False when the token named no known value and was treated as unfiltered.
    pub recognized: bool,
}

fn assign<T: FilterToken>(slot: &mut Selection<T>, dimension: Dimension, token: &str) -> bool {
    let (selection, recognized) = Selection::parse(token);
    if !recognized {
        tracing::warn!(%dimension, token, "Unrecognised filter token, treating as unfiltered");
    }
    *slot = selection;
    recognized
}

impl FilterState {
    /// Create a state that matches every point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the zone.
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Selection::Only(zone);
        self
    }

    /// Constrain the education authority.
    pub fn authority(mut self, authority: Authority) -> Self {
        self.authority = Selection::Only(authority);
        self
    }

    /// Constrain the stratum.
    pub fn stratum(mut self, stratum: Stratum) -> Self {
        self.stratum = Selection::Only(stratum);
        self
    }

    /// Constrain the cluster.
    pub fn cluster(mut self, cluster: ClusterId) -> Self {
        self.cluster = Selection::Only(cluster);
        self
    }

    /// Record a shift selection. Has no effect on which points match.
    pub fn shift(mut self, shift: Shift) -> Self {
        self.shift = Selection::Only(shift);
        self
    }

    /// Parse a dimension name as used in URLs and selector keys.
    pub fn parse_dimension(name: &str) -> sagdec_core::Result<Dimension> {
        name.parse()
    }

    /// Replace one dimension's value from a selector token.
    pub fn set(&mut self, dimension: Dimension, token: &str) -> FilterUpdate {
        let recognized = match dimension {
            Dimension::Zone => assign(&mut self.zone, dimension, token),
            Dimension::Authority => assign(&mut self.authority, dimension, token),
            Dimension::Stratum => assign(&mut self.stratum, dimension, token),
            Dimension::Cluster => assign(&mut self.cluster, dimension, token),
            Dimension::Shift => assign(&mut self.shift, dimension, token),
        };
        FilterUpdate {
            dimension,
            token: token.to_string(),
            applied: self.token(dimension),
            recognized,
        }
    }

    /// Current token for a dimension (`All` when unfiltered).
    pub fn token(&self, dimension: Dimension) -> String {
        match dimension {
            Dimension::Zone => self.zone.to_string(),
            Dimension::Authority => self.authority.to_string(),
            Dimension::Stratum => self.stratum.to_string(),
            Dimension::Cluster => self.cluster.to_string(),
            Dimension::Shift => self.shift.to_string(),
        }
    }

    fn is_constrained(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Zone => !self.zone.is_any(),
            Dimension::Authority => !self.authority.is_any(),
            Dimension::Stratum => !self.stratum.is_any(),
            Dimension::Cluster => !self.cluster.is_any(),
            Dimension::Shift => !self.shift.is_any(),
        }
    }

    /// Dimensions set to a concrete value.
    pub fn active_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.is_constrained(*d))
            .collect()
    }

    /// Constrained dimensions that do not affect which points match.
    pub fn ignored_dimensions(&self) -> Vec<Dimension> {
        if self.is_constrained(Dimension::Shift) {
            vec![Dimension::Shift]
        } else {
            Vec::new()
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_dimensions().is_empty()
    }
}
