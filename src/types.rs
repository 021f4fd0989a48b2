//! Common types used throughout page-links
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Navigation links of a page, keyed by relation
pub type Links = BTreeMap<Relation, String>;

/// Total count sentinel: the provider did not report a total
pub const UNKNOWN_TOTAL: i64 = -1;

// ============================================================================
// Relation
// ============================================================================

/// Position of a linked page relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Prev,
    Next,
    First,
    Last,
}

impl Relation {
    /// Every relation a paginator may produce
    pub const ALL: [Relation; 4] = [
        Relation::Prev,
        Relation::Next,
        Relation::First,
        Relation::Last,
    ];

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Prev => "prev",
            Relation::Next => "next",
            Relation::First => "first",
            Relation::Last => "last",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Relation::Prev),
            "next" => Ok(Relation::Next),
            "first" => Ok(Relation::First),
            "last" => Ok(Relation::Last),
            other => Err(Error::config(format!("Unknown link relation: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_round_trip_names() {
        for rel in Relation::ALL {
            assert_eq!(rel.as_str().parse::<Relation>().unwrap(), rel);
            assert_eq!(rel.to_string(), rel.as_str());
        }
    }

    #[test]
    fn test_relation_rejects_unknown() {
        assert!("previous".parse::<Relation>().is_err());
        assert!("Next".parse::<Relation>().is_err());
    }

    #[test]
    fn test_relation_serde() {
        let rel: Relation = serde_json::from_str("\"last\"").unwrap();
        assert_eq!(rel, Relation::Last);

        let mut links = Links::new();
        links.insert(Relation::Next, "/items?page=2".to_string());
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"next":"/items?page=2"}"#);
    }
}
