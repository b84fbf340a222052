//! JSON-backed strategy catalog.
//!
//! The built-in catalog is compiled into the binary; an override file can be
//! supplied through configuration. Either way the document is validated once
//! at load time and is read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_catalog::StrategyCatalog;
use crate::domain::values::trigger::Trigger;

const BUILTIN_CATALOG: &str = include_str!("../../../data/strategies.json");

/// Largest magnitude accepted for `boost` and `transition_year_priority`.
pub const MAX_PRIORITY_MAGNITUDE: i64 = 1_000_000;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: String,
    strategies: Vec<StrategyRecord>,
}

#[derive(Debug, Clone)]
pub struct JsonCatalog {
    version: String,
    strategies: Vec<StrategyRecord>,
}

impl JsonCatalog {
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Self::from_records(doc.version, doc.strategies)
    }

    /// Build from in-memory records, e.g. synthetic catalogs in tests.
    pub fn from_records(
        version: impl Into<String>,
        strategies: Vec<StrategyRecord>,
    ) -> Result<Self, DomainError> {
        validate(&strategies)?;
        let version = version.into();
        info!(version = %version, strategies = strategies.len(), "loaded strategy catalog");
        Ok(Self {
            version,
            strategies,
        })
    }
}

impl StrategyCatalog for JsonCatalog {
    fn version(&self) -> &str {
        &self.version
    }

    fn strategies(&self) -> &[StrategyRecord] {
        &self.strategies
    }
}

fn validate(strategies: &[StrategyRecord]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();

    for s in strategies {
        if s.id.trim().is_empty() {
            return Err(DomainError::InvalidCatalog("strategy with empty id".into()));
        }
        if s.title.trim().is_empty() {
            return Err(DomainError::InvalidCatalog(format!("'{}' has an empty title", s.id)));
        }
        if !seen.insert(s.id.as_str()) {
            return Err(DomainError::InvalidCatalog(format!("duplicate id '{}'", s.id)));
        }

        let boost = s.priority.as_ref().map(|p| p.boost);
        for (field, value) in [("boost", boost), ("transition_year_priority", s.transition_year_priority)] {
            if let Some(v) = value {
                if v.unsigned_abs() > MAX_PRIORITY_MAGNITUDE as u64 {
                    return Err(DomainError::InvalidCatalog(format!(
                        "'{}' has {field} {v} outside +/-{MAX_PRIORITY_MAGNITUDE}",
                        s.id
                    )));
                }
            }
        }

        if let Some(window) = s.priority.as_ref().and_then(|p| p.age_window) {
            if window.min > window.max {
                return Err(DomainError::InvalidCatalog(format!(
                    "'{}' has age window {}..{}",
                    s.id, window.min, window.max
                )));
            }
        }

        // A trigger set nobody can satisfy is an authoring mistake.
        let min_age = s.triggers.iter().filter_map(|t| match t {
            Trigger::AgeAtLeast(a) => Some(*a),
            _ => None,
        }).max();
        let max_age = s.triggers.iter().filter_map(|t| match t {
            Trigger::AgeAtMost(a) => Some(*a),
            _ => None,
        }).min();
        if let (Some(lo), Some(hi)) = (min_age, max_age) {
            if lo > hi {
                return Err(DomainError::InvalidCatalog(format!(
                    "'{}' requires age >= {lo} and <= {hi}",
                    s.id
                )));
            }
        }
        for t in &s.triggers {
            let empty = match t {
                Trigger::MaritalStatusIn(set) => set.is_empty(),
                Trigger::EmploymentStatusIn(set) => set.is_empty(),
                _ => false,
            };
            if empty {
                return Err(DomainError::InvalidCatalog(format!(
                    "'{}' has an empty set in trigger '{t}'",
                    s.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::strategy::{AgeWindow, PriorityModifiers};
    use crate::domain::values::impact::Impact;
    use crate::domain::values::strategy_category::StrategyCategory;

    fn record(id: &str) -> StrategyRecord {
        StrategyRecord::new(id, "Title", Impact::Low, StrategyCategory::Education)
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = JsonCatalog::builtin().unwrap();
        assert!(!catalog.strategies().is_empty());
        assert!(catalog.get("roth-conversion").is_some());
        assert!(catalog.get("529-roth-rollover").unwrap().is_general());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = JsonCatalog::from_records("t", vec![record("a"), record("a")]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCatalog(_)));
    }

    #[test]
    fn test_inverted_age_window_rejected() {
        let s = record("a").with_priority(PriorityModifiers {
            age_window: Some(AgeWindow { min: 70, max: 60 }),
            ..Default::default()
        });
        assert!(JsonCatalog::from_records("t", vec![s]).is_err());
    }

    #[test]
    fn test_contradictory_age_triggers_rejected() {
        let s = record("a").with_triggers(vec![Trigger::AgeAtLeast(70), Trigger::AgeAtMost(60)]);
        assert!(JsonCatalog::from_records("t", vec![s]).is_err());
    }

    #[test]
    fn test_empty_membership_set_rejected() {
        let s = record("a").with_triggers(vec![Trigger::MaritalStatusIn(vec![])]);
        assert!(JsonCatalog::from_records("t", vec![s]).is_err());
    }

    #[test]
    fn test_out_of_range_priority_values_rejected() {
        let boosted = record("a").with_priority(PriorityModifiers {
            boost: i64::MAX,
            ..Default::default()
        });
        let err = JsonCatalog::from_records("t", vec![boosted]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCatalog(_)));

        let transition = record("b").with_transition_priority(i64::MIN);
        assert!(JsonCatalog::from_records("t", vec![transition]).is_err());

        let edge = record("c")
            .with_transition_priority(-MAX_PRIORITY_MAGNITUDE)
            .with_priority(PriorityModifiers {
                boost: MAX_PRIORITY_MAGNITUDE,
                ..Default::default()
            });
        assert!(JsonCatalog::from_records("t", vec![edge]).is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = JsonCatalog::from_json("{\"version\": 1}").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
