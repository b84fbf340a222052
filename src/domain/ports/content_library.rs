//! Auxiliary content port.
//!
//! Summary documents enrich each matched strategy with advisor questions, an
//! example scenario and a personalized estimate. Lookups are keyed by
//! strategy id and always succeed: an id without an entry gets the generic
//! default record.

use serde::{Deserialize, Serialize};

use crate::domain::entities::profile::Profile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorQuestions {
    pub questions: Vec<String>,
}

impl Default for AdvisorQuestions {
    fn default() -> Self {
        Self {
            questions: vec![
                "Does this strategy apply to my situation this year?".to_string(),
                "What would implementing it cost, and what could it save?".to_string(),
                "Are there deadlines I need to plan around?".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleScenario {
    pub title: String,
    pub narrative: String,
}

impl Default for ExampleScenario {
    fn default() -> Self {
        Self {
            title: "How this could work".to_string(),
            narrative: "Results depend on your full tax picture. A tax professional can model \
                        this strategy against your actual income, deductions and timeline."
                .to_string(),
        }
    }
}

/// How to derive a rough savings range from the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateFormula {
    /// Percentages of the retirement bracket midpoint.
    PercentOfRetirement { low_pct: f64, high_pct: f64 },
    /// Percentages of the real-estate bracket midpoint.
    PercentOfRealEstate { low_pct: f64, high_pct: f64 },
    FixedRange { low: f64, high: f64 },
    Qualitative { note: String },
}

impl Default for EstimateFormula {
    fn default() -> Self {
        EstimateFormula::Qualitative {
            note: "Potential savings vary widely; ask your advisor for a projection.".to_string(),
        }
    }
}

/// A personalized savings range in dollars. Qualitative formulas carry only a note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub note: Option<String>,
}

impl EstimateFormula {
    pub fn estimate(&self, profile: &Profile) -> Estimate {
        match self {
            EstimateFormula::PercentOfRetirement { low_pct, high_pct } => {
                let base = profile.retirement_range.midpoint();
                Estimate::range(base * low_pct / 100.0, base * high_pct / 100.0)
            }
            EstimateFormula::PercentOfRealEstate { low_pct, high_pct } => {
                let base = profile.real_estate_range.midpoint();
                Estimate::range(base * low_pct / 100.0, base * high_pct / 100.0)
            }
            EstimateFormula::FixedRange { low, high } => Estimate::range(*low, *high),
            EstimateFormula::Qualitative { note } => Estimate {
                low: None,
                high: None,
                note: Some(note.clone()),
            },
        }
    }
}

impl Estimate {
    fn range(a: f64, b: f64) -> Self {
        Self {
            low: Some(a.min(b).round()),
            high: Some(a.max(b).round()),
            note: None,
        }
    }
}

pub trait ContentLibrary: Send + Sync {
    fn advisor_questions(&self, strategy_id: &str) -> AdvisorQuestions;
    fn example_scenario(&self, strategy_id: &str) -> ExampleScenario;
    fn estimate_formula(&self, strategy_id: &str) -> EstimateFormula;
}
