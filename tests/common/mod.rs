//! Shared test helpers.
#![allow(dead_code)]

use std::sync::Arc;

use taxplan::application::normalize::RawAnswers;
use taxplan::domain::entities::matched_strategy::MatchedStrategy;
use taxplan::domain::entities::strategy::StrategyRecord;
use taxplan::domain::values::impact::Impact;
use taxplan::domain::values::scoring_weights::ScoringWeights;
use taxplan::domain::values::strategy_category::StrategyCategory;
use taxplan::infrastructure::catalog::json_catalog::JsonCatalog;
use taxplan::infrastructure::content::static_content::StaticContentLibrary;
use taxplan::TaxPlan;

pub fn setup() -> TaxPlan {
    TaxPlan::with_sources(
        Arc::new(JsonCatalog::builtin().unwrap()),
        Arc::new(StaticContentLibrary::builtin().unwrap()),
        ScoringWeights::default(),
    )
}

pub fn setup_with(strategies: Vec<StrategyRecord>) -> TaxPlan {
    TaxPlan::with_sources(
        Arc::new(JsonCatalog::from_records("test", strategies).unwrap()),
        Arc::new(StaticContentLibrary::empty()),
        ScoringWeights::default(),
    )
}

pub fn answers(json: &str) -> RawAnswers {
    serde_json::from_str(json).unwrap()
}

pub fn make_strategy(id: &str, impact: Impact) -> StrategyRecord {
    StrategyRecord::new(id, id.to_uppercase(), impact, StrategyCategory::Retirement)
}

pub fn ids(matches: &[MatchedStrategy]) -> Vec<&str> {
    matches.iter().map(|m| m.id()).collect()
}

pub fn position(matches: &[MatchedStrategy], id: &str) -> Option<usize> {
    matches.iter().position(|m| m.id() == id)
}
