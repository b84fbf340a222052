use serde::{Deserialize, Serialize};

use crate::domain::values::impact::Impact;
use crate::domain::values::real_estate_range::RealEstateRange;
use crate::domain::values::retirement_range::RetirementRange;
use crate::domain::values::strategy_category::StrategyCategory;
use crate::domain::values::trigger::Trigger;

/// Inclusive age bounds used for the age-window score bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeWindow {
    pub min: u32,
    pub max: u32,
}

impl AgeWindow {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Score weights that never affect eligibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityModifiers {
    /// Retirement brackets for which this strategy ranks higher.
    pub net_worth_tiers: Vec<RetirementRange>,
    pub real_estate_tiers: Vec<RealEstateRange>,
    pub age_window: Option<AgeWindow>,
    /// Hand-tuned constant added to the score.
    pub boost: i64,
}

/// One catalog entry. Read-only after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub category: StrategyCategory,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub suppress_during_unemployment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_year_priority: Option<i64>,
}

impl StrategyRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        impact: Impact,
        category: StrategyCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            impact,
            category,
            triggers: Vec::new(),
            suppress_during_unemployment: false,
            priority: None,
            transition_year_priority: None,
        }
    }

    pub fn with_triggers(mut self, triggers: Vec<Trigger>) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn with_priority(mut self, priority: PriorityModifiers) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_transition_priority(mut self, value: i64) -> Self {
        self.transition_year_priority = Some(value);
        self
    }

    pub fn suppressed_during_unemployment(mut self) -> Self {
        self.suppress_during_unemployment = true;
        self
    }

    /// Entries without triggers are general education shown to everyone.
    pub fn is_general(&self) -> bool {
        self.triggers.is_empty()
    }
}
