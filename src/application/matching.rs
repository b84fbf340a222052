//! Matching use case: filter, score and rank the catalog for one profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::application::eligibility::filter_eligible;
use crate::application::scoring::{rank, score};
use crate::domain::entities::matched_strategy::MatchedStrategy;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_catalog::StrategyCatalog;
use crate::domain::values::scoring_weights::ScoringWeights;
use crate::domain::values::strategy_category::StrategyCategory;

/// Presentation options. None of them affect eligibility.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// Attach raw scores to the serialized output.
    pub include_scores: bool,
    /// Keep only this category, after ranking.
    pub category: Option<StrategyCategory>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub catalog_version: String,
    pub strategies_evaluated: usize,
    pub strategies_eligible: usize,
    pub matches: Vec<MatchedStrategy>,
}

/// Filter, score and stable-sort `catalog` for `profile`.
///
/// Pure and deterministic: the same inputs always give the same members in
/// the same order.
pub fn match_strategies(
    catalog: &[StrategyRecord],
    profile: &Profile,
    weights: &ScoringWeights,
) -> Vec<MatchedStrategy> {
    let scored = filter_eligible(catalog, profile)
        .into_iter()
        .map(|s| {
            let total = score(s, profile, weights);
            debug!(strategy = %s.id, score = total, "scored");
            MatchedStrategy::new(s.clone(), total)
        })
        .collect();
    rank(scored)
}

pub struct MatchUseCase {
    catalog: Arc<dyn StrategyCatalog>,
    weights: ScoringWeights,
}

impl MatchUseCase {
    pub fn new(catalog: Arc<dyn StrategyCatalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn execute(&self, profile: &Profile, options: &MatchOptions) -> Result<MatchReport, DomainError> {
        if options.limit == Some(0) {
            return Err(DomainError::InvalidInput("limit must be at least 1".into()));
        }

        let strategies = self.catalog.strategies();
        let mut matches = match_strategies(strategies, profile, &self.weights);
        let strategies_eligible = matches.len();

        if let Some(category) = options.category {
            matches.retain(|m| m.strategy.category == category);
        }
        if let Some(max) = options.limit {
            matches.truncate(max);
        }
        if options.include_scores {
            matches = matches.into_iter().map(MatchedStrategy::with_visible_score).collect();
        }

        info!(
            evaluated = strategies.len(),
            eligible = strategies_eligible,
            returned = matches.len(),
            "matched profile against catalog"
        );

        Ok(MatchReport {
            catalog_version: self.catalog.version().to_string(),
            strategies_evaluated: strategies.len(),
            strategies_eligible,
            matches,
        })
    }
}
