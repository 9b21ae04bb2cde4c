use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use sagdec_core::{Authority, ClusterId, Shift, Stratum, Zone};

/// Token written for an unconstrained dimension.
pub const UNFILTERED_TOKEN: &str = "All";

/// Tokens that mean "no constraint" (compared case-insensitively).
const SENTINELS: &[&str] = &["all", "todas", "todos", "unfiltered", ""];

/// Whether `token` is one of the "unfiltered" sentinels.
pub fn is_sentinel(token: &str) -> bool {
    let t = token.trim().to_lowercase();
    SENTINELS.contains(&t.as_str())
}

/// A value a selector token can name.
pub trait FilterToken: Sized {
    /// `None` when the token names no value of the dimension's domain.
    fn parse_token(token: &str) -> Option<Self>;
}

impl FilterToken for Zone {
    fn parse_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl FilterToken for Authority {
    fn parse_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl FilterToken for Stratum {
    fn parse_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl FilterToken for Shift {
    fn parse_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

/// Only ids with a cluster definition; points may still carry others.
impl FilterToken for ClusterId {
    fn parse_token(token: &str) -> Option<Self> {
        ClusterId::parse_defined(token)
    }
}

/// One dimension's filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// Unconstrained.
    Any,
    /// Only values equal to `T`.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: PartialEq> Selection<T> {
    /// Test if a field value passes this selection.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::Any => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl<T: FilterToken> Selection<T> {
    /// Parse a selector token. Sentinels become `Any`. Tokens that do not
    /// name a value of `T` also become `Any`, reported by the `false`.
    pub fn parse(token: &str) -> (Self, bool) {
        if is_sentinel(token) {
            return (Selection::Any, true);
        }
        match T::parse_token(token) {
            Some(v) => (Selection::Only(v), true),
            None => (Selection::Any, false),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Any => f.write_str(UNFILTERED_TOKEN),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct SelectionVisitor<T>(PhantomData<T>);

impl<T: FilterToken> SelectionVisitor<T> {
    fn lenient(token: &str) -> Selection<T> {
        let (selection, recognized) = Selection::parse(token);
        if !recognized {
            tracing::warn!(token, "Unrecognised filter token, treating as unfiltered");
        }
        selection
    }
}

impl<'de, T: FilterToken> Visitor<'de> for SelectionVisitor<T> {
    type Value = Selection<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a filter token")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Self::lenient(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Self::lenient(&v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Self::lenient(&v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Self::lenient(&v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Self::lenient(&v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Selection::Any)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Selection::Any)
    }
}

impl<'de, T: FilterToken> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SelectionVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        for token in ["All", "Todas", "todos", "UNFILTERED", "", "  all "] {
            assert!(is_sentinel(token), "{token:?}");
        }
        assert!(!is_sentinel("Urban"));
    }

    #[test]
    fn test_parse_sentinel_is_any() {
        assert_eq!(Selection::<Zone>::parse("Todas"), (Selection::Any, true));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(Selection::<Zone>::parse("Urbana"), (Selection::Only(Zone::Urban), true));
        assert_eq!(Selection::<ClusterId>::parse("3"), (Selection::Only(ClusterId(3)), true));
    }

    #[test]
    fn test_parse_out_of_range_is_any_unrecognized() {
        assert_eq!(Selection::<Stratum>::parse("9"), (Selection::Any, false));
        assert_eq!(Selection::<Zone>::parse("Coastal"), (Selection::Any, false));
    }

    #[test]
    fn test_parse_cluster_outside_definitions_is_any() {
        assert_eq!(Selection::<ClusterId>::parse("8"), (Selection::Only(ClusterId(8)), true));
        assert_eq!(Selection::<ClusterId>::parse("9"), (Selection::Any, false));
        assert_eq!(Selection::<ClusterId>::parse("0"), (Selection::Any, false));
    }

    #[test]
    fn test_matches() {
        let sel = Selection::Only(Zone::Rural);
        assert!(sel.matches(&Zone::Rural));
        assert!(!sel.matches(&Zone::Urban));
        assert!(Selection::<Zone>::Any.matches(&Zone::Urban));
    }

    #[test]
    fn test_serde_tokens() {
        let sel: Selection<ClusterId> = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(sel, Selection::Only(ClusterId(3)));
        let sel: Selection<ClusterId> = serde_json::from_str("3").unwrap();
        assert_eq!(sel, Selection::Only(ClusterId(3)));
        let sel: Selection<Zone> = serde_json::from_str("\"nowhere\"").unwrap();
        assert_eq!(sel, Selection::Any);
        let sel: Selection<ClusterId> = serde_json::from_str("9").unwrap();
        assert_eq!(sel, Selection::Any);
        assert_eq!(serde_json::to_string(&Selection::<Zone>::Any).unwrap(), "\"All\"");
        assert_eq!(serde_json::to_string(&Selection::Only(Zone::Urban)).unwrap(), "\"Urban\"");
    }

    #[test]
    fn test_serde_floats_and_bools() {
        let sel: Selection<ClusterId> = serde_json::from_str("3.0").unwrap();
        assert_eq!(sel, Selection::Only(ClusterId(3)));
        let sel: Selection<ClusterId> = serde_json::from_str("2.5").unwrap();
        assert_eq!(sel, Selection::Any);
        let sel: Selection<Zone> = serde_json::from_str("true").unwrap();
        assert_eq!(sel, Selection::Any);
    }
}
