//! Constants for the additive priority score.

use serde::{Deserialize, Serialize};

use super::impact::Impact;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub impact_high: i64,
    pub impact_medium: i64,
    pub impact_low: i64,
    /// Multiplied by the 1-based rank of a matching net-worth tier.
    pub net_worth_tier: i64,
    /// Multiplied by the 1-based rank of a matching real-estate tier.
    pub real_estate_tier: i64,
    pub age_window: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            impact_high: 30,
            impact_medium: 20,
            impact_low: 10,
            net_worth_tier: 5,
            real_estate_tier: 5,
            age_window: 15,
        }
    }
}

impl ScoringWeights {
    pub fn impact_bonus(&self, impact: Impact) -> i64 {
        match impact {
            Impact::High => self.impact_high,
            Impact::Medium => self.impact_medium,
            Impact::Low => self.impact_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_ordering() {
        let w = ScoringWeights::default();
        assert!(w.impact_bonus(Impact::High) > w.impact_bonus(Impact::Medium));
        assert!(w.impact_bonus(Impact::Medium) > w.impact_bonus(Impact::Low));
    }
}
