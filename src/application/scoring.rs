//! Priority scorer and sorter.
//!
//! The score is a plain sum of independent components. Sorting is stable so
//! equal scores keep catalog order, which keeps output reproducible.

use serde::Serialize;

use crate::domain::entities::matched_strategy::MatchedStrategy;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::values::scoring_weights::ScoringWeights;

/// Per-component contributions to a strategy's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub transition: i64,
    pub impact: i64,
    pub net_worth: i64,
    pub real_estate: i64,
    pub age_window: i64,
    pub boost: i64,
}

impl ScoreBreakdown {
    /// Saturates rather than overflowing on extreme catalog values.
    pub fn total(&self) -> i64 {
        [
            self.transition,
            self.impact,
            self.net_worth,
            self.real_estate,
            self.age_window,
            self.boost,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

pub fn score_breakdown(
    strategy: &StrategyRecord,
    profile: &Profile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let transition = match strategy.transition_year_priority {
        Some(value) if profile.transition.is_transition_year => value,
        _ => 0,
    };

    let mut breakdown = ScoreBreakdown {
        transition,
        impact: weights.impact_bonus(strategy.impact),
        ..Default::default()
    };

    let Some(priority) = &strategy.priority else {
        return breakdown;
    };

    if priority.net_worth_tiers.contains(&profile.retirement_range) {
        breakdown.net_worth = tier_bonus(weights.net_worth_tier, profile.retirement_range.index());
    }
    if priority.real_estate_tiers.contains(&profile.real_estate_range) {
        breakdown.real_estate =
            tier_bonus(weights.real_estate_tier, profile.real_estate_range.index());
    }
    if let (Some(window), Some(age)) = (priority.age_window, profile.age) {
        if window.contains(age) {
            breakdown.age_window = weights.age_window;
        }
    }
    breakdown.boost = priority.boost;

    breakdown
}

fn tier_bonus(weight: i64, index: usize) -> i64 {
    weight.saturating_mul(index as i64 + 1)
}

pub fn score(strategy: &StrategyRecord, profile: &Profile, weights: &ScoringWeights) -> i64 {
    score_breakdown(strategy, profile, weights).total()
}

/// Sort descending by score. `sort_by` is stable, so ties keep input order.
pub fn rank(mut matches: Vec<MatchedStrategy>) -> Vec<MatchedStrategy> {
    matches.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));
    matches
}
