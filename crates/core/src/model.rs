//! Dashboard data model: establishment summaries, synthetic points,
//! association rules, cluster definitions and summary statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strip the accents the source UI uses so tokens compare ASCII-only.
pub(crate) fn fold_token(token: &str) -> String {
    token
        .trim()
        .chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ── Zone ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Urban,
    Rural,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Urban, Zone::Rural];

    /// Label shown in the selectors and chart axis.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Urban => "Urbana",
            Zone::Rural => "Rural",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Urban => write!(f, "Urban"),
            Zone::Rural => write!(f, "Rural"),
        }
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_token(s).as_str() {
            "urban" | "urbana" => Ok(Zone::Urban),
            "rural" => Ok(Zone::Rural),
            _ => Err(format!("unknown zone: {s}")),
        }
    }
}

// ── Authority ─────────────────────────────────────────────────

/// Regional education authority ("secretaría").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    Antioquia,
    Bogota,
    Valle,
    Atlantico,
    Cundinamarca,
}

impl Authority {
    pub const ALL: [Authority; 5] = [
        Authority::Antioquia,
        Authority::Bogota,
        Authority::Valle,
        Authority::Atlantico,
        Authority::Cundinamarca,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Authority::Antioquia => "Antioquia",
            Authority::Bogota => "Bogotá",
            Authority::Valle => "Valle",
            Authority::Atlantico => "Atlántico",
            Authority::Cundinamarca => "Cundinamarca",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Authority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_token(s).as_str() {
            "antioquia" => Ok(Authority::Antioquia),
            "bogota" => Ok(Authority::Bogota),
            "valle" => Ok(Authority::Valle),
            "atlantico" => Ok(Authority::Atlantico),
            "cundinamarca" => Ok(Authority::Cundinamarca),
            _ => Err(format!("unknown authority: {s}")),
        }
    }
}

// ── Shift ─────────────────────────────────────────────────────

/// School shift ("jornada"). Selectable, but points carry no shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Full,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Full, Shift::Night];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Mañana",
            Shift::Full => "Completa",
            Shift::Night => "Nocturna",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_token(s).as_str() {
            "manana" | "morning" => Ok(Shift::Morning),
            "completa" | "full" => Ok(Shift::Full),
            "nocturna" | "night" => Ok(Shift::Night),
            _ => Err(format!("unknown shift: {s}")),
        }
    }
}

// ── Stratum / ClusterId ───────────────────────────────────────

/// Socioeconomic stratum, 1 (lowest) to 6 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stratum(pub(crate) u8);

impl Stratum {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Stratum> {
        (Self::MIN..=Self::MAX).map(Stratum)
    }
}

impl TryFrom<u8> for Stratum {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Stratum::new(value).ok_or_else(|| format!("stratum out of range: {value}"))
    }
}

impl From<Stratum> for u8 {
    fn from(stratum: Stratum) -> Self {
        stratum.0
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Stratum {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s.trim().parse().map_err(|_| format!("invalid stratum: {s}"))?;
        Stratum::new(n).ok_or_else(|| format!("stratum out of range: {s}"))
    }
}

/// Cluster identifier. Not range-checked: a point may reference an id
/// that has no definition or colour entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(pub u8);

impl ClusterId {
    pub const DEFINED_MIN: u8 = 1;
    pub const DEFINED_MAX: u8 = 8;

    /// Ids covered by the cluster definitions and colour table.
    pub fn defined() -> impl Iterator<Item = ClusterId> {
        (Self::DEFINED_MIN..=Self::DEFINED_MAX).map(ClusterId)
    }

    pub fn is_defined(&self) -> bool {
        (Self::DEFINED_MIN..=Self::DEFINED_MAX).contains(&self.0)
    }

    /// Parse a selector token, accepting only ids that have a definition.
    pub fn parse_defined(s: &str) -> Option<Self> {
        s.parse::<ClusterId>().ok().filter(ClusterId::is_defined)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClusterId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(0) => Err(format!("cluster ids start at 1: {s}")),
            Ok(n) => Ok(ClusterId(n)),
            Err(_) => Err(format!("invalid cluster id: {s}")),
        }
    }
}

// ── Records ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstablishmentSummary {
    pub zone: Zone,
    pub count: u32,
    /// Share of all establishments, 0..=100.
    pub percentage: f64,
}

/// One synthetic establishment plotted in the correlation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPoint {
    /// Normalised number of sites, 0..1.
    pub sites: f64,
    pub stratum: Stratum,
    pub cluster: ClusterId,
    pub zone: Zone,
    pub authority: Authority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "Bajo",
            Impact::Medium => "Medio",
            Impact::High => "Alto",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: String,
    pub consequent: String,
    /// Support as a percentage.
    pub support: f64,
    /// Confidence, 0..=1.
    pub confidence: f64,
    pub lift: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterDefinition {
    pub id: ClusterId,
    pub name: String,
    pub percentage_share: f64,
    pub traits: String,
    /// Hex colour, e.g. `#FF6384`.
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRef {
    Building,
    Globe,
    Target,
    Award,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    pub label: String,
    /// Preformatted, e.g. "2,404".
    pub value: String,
    pub icon: IconRef,
    /// Text colour class, e.g. `text-blue-600`.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parse_accepts_source_tokens() {
        assert_eq!("Urbana".parse::<Zone>().unwrap(), Zone::Urban);
        assert_eq!("urban".parse::<Zone>().unwrap(), Zone::Urban);
        assert_eq!(" Rural ".parse::<Zone>().unwrap(), Zone::Rural);
        assert!("Suburban".parse::<Zone>().is_err());
    }

    #[test]
    fn test_authority_parse_with_and_without_accents() {
        assert_eq!("Bogotá".parse::<Authority>().unwrap(), Authority::Bogota);
        assert_eq!("bogota".parse::<Authority>().unwrap(), Authority::Bogota);
        assert_eq!("ATLÁNTICO".parse::<Authority>().unwrap(), Authority::Atlantico);
        assert!("Guajira".parse::<Authority>().is_err());
    }

    #[test]
    fn test_shift_parse() {
        assert_eq!("Mañana".parse::<Shift>().unwrap(), Shift::Morning);
        assert_eq!("night".parse::<Shift>().unwrap(), Shift::Night);
        assert!("tarde".parse::<Shift>().is_err());
    }

    #[test]
    fn test_stratum_range() {
        assert!(Stratum::new(0).is_none());
        assert!(Stratum::new(7).is_none());
        assert_eq!("3".parse::<Stratum>().unwrap().value(), 3);
        assert!("7".parse::<Stratum>().is_err());
        assert_eq!(Stratum::all().count(), 6);
    }

    #[test]
    fn test_cluster_id_parse() {
        assert_eq!("3".parse::<ClusterId>().unwrap(), ClusterId(3));
        assert_eq!("12".parse::<ClusterId>().unwrap(), ClusterId(12));
        assert!("0".parse::<ClusterId>().is_err());
        assert!("three".parse::<ClusterId>().is_err());
    }

    #[test]
    fn test_cluster_id_parse_defined() {
        assert_eq!(ClusterId::parse_defined(" 8 "), Some(ClusterId(8)));
        assert_eq!(ClusterId::parse_defined("03"), Some(ClusterId(3)));
        assert_eq!(ClusterId::parse_defined("9"), None);
        assert_eq!(ClusterId::parse_defined("0"), None);
        assert!(!ClusterId(12).is_defined());
    }

    #[test]
    fn test_stratum_deserialize_checks_range() {
        assert_eq!(serde_json::from_str::<Stratum>("4").unwrap().value(), 4);
        assert!(serde_json::from_str::<Stratum>("0").is_err());
        assert!(serde_json::from_str::<Stratum>("7").is_err());
        assert_eq!(serde_json::to_string(&Stratum(5)).unwrap(), "5");
    }

    #[test]
    fn test_point_serializes_numbers_transparently() {
        let point = SyntheticPoint {
            sites: 0.5,
            stratum: Stratum::new(2).unwrap(),
            cluster: ClusterId(4),
            zone: Zone::Rural,
            authority: Authority::Valle,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["stratum"], 2);
        assert_eq!(json["cluster"], 4);
        assert_eq!(json["zone"], "Rural");
    }
}
