use serde::Serialize;

use super::strategy::StrategyRecord;

/// A catalog entry that passed eligibility, paired with its priority score.
///
/// The score only serves ordering; it is serialized only when a caller asks
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedStrategy {
    #[serde(flatten)]
    pub strategy: StrategyRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip)]
    pub raw_score: i64,
}

impl MatchedStrategy {
    pub fn new(strategy: StrategyRecord, raw_score: i64) -> Self {
        Self {
            strategy,
            score: None,
            raw_score,
        }
    }

    /// Expose the raw score in serialized output.
    pub fn with_visible_score(mut self) -> Self {
        self.score = Some(self.raw_score);
        self
    }

    pub fn id(&self) -> &str {
        &self.strategy.id
    }
}
