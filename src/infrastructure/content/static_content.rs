//! Auxiliary content tables keyed by strategy id.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::ports::content_library::{
    AdvisorQuestions, ContentLibrary, EstimateFormula, ExampleScenario,
};

const BUILTIN_CONTENT: &str = include_str!("../../../data/content.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ContentEntry {
    advisor_questions: Option<Vec<String>>,
    scenario: Option<ExampleScenario>,
    estimate: Option<EstimateFormula>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDocument {
    #[serde(default)]
    entries: HashMap<String, ContentEntry>,
}

/// In-memory content tables. Missing ids, or missing sections of an id,
/// fall back to the generic defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticContentLibrary {
    entries: HashMap<String, ContentEntry>,
}

impl StaticContentLibrary {
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let doc: ContentDocument = serde_json::from_str(text)?;
        Ok(Self {
            entries: doc.entries,
        })
    }

    /// No tables at all: every lookup returns the defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    fn entry(&self, strategy_id: &str) -> Option<&ContentEntry> {
        let entry = self.entries.get(strategy_id);
        if entry.is_none() {
            debug!(strategy = strategy_id, "no content entry, using defaults");
        }
        entry
    }
}

impl ContentLibrary for StaticContentLibrary {
    fn advisor_questions(&self, strategy_id: &str) -> AdvisorQuestions {
        self.entry(strategy_id)
            .and_then(|e| e.advisor_questions.clone())
            .filter(|q| !q.is_empty())
            .map(|questions| AdvisorQuestions { questions })
            .unwrap_or_default()
    }

    fn example_scenario(&self, strategy_id: &str) -> ExampleScenario {
        self.entry(strategy_id)
            .and_then(|e| e.scenario.clone())
            .unwrap_or_default()
    }

    fn estimate_formula(&self, strategy_id: &str) -> EstimateFormula {
        self.entry(strategy_id)
            .and_then(|e| e.estimate.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_parses() {
        let lib = StaticContentLibrary::builtin().unwrap();
        let q = lib.advisor_questions("roth-conversion");
        assert_ne!(q, AdvisorQuestions::default());
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let lib = StaticContentLibrary::builtin().unwrap();
        assert_eq!(lib.advisor_questions("no-such-id"), AdvisorQuestions::default());
        assert_eq!(lib.example_scenario("no-such-id"), ExampleScenario::default());
        assert_eq!(lib.estimate_formula("no-such-id"), EstimateFormula::default());
    }

    #[test]
    fn test_partial_entry_falls_back_per_section() {
        let lib = StaticContentLibrary::from_json(
            r#"{"entries": {"x": {"estimate": {"kind": "fixed_range", "low": 1.0, "high": 2.0}}}}"#,
        )
        .unwrap();
        assert_eq!(lib.advisor_questions("x"), AdvisorQuestions::default());
        assert_eq!(
            lib.estimate_formula("x"),
            EstimateFormula::FixedRange { low: 1.0, high: 2.0 }
        );
    }

    #[test]
    fn test_empty_question_list_uses_default() {
        let lib =
            StaticContentLibrary::from_json(r#"{"entries": {"x": {"advisor_questions": []}}}"#)
                .unwrap();
        assert_eq!(lib.advisor_questions("x"), AdvisorQuestions::default());
    }
}
