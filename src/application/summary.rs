//! Planning summary document.
//!
//! Takes the top matches for a profile and joins each with its auxiliary
//! content. The result serializes to JSON or renders as a plain-text
//! document for printing.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::matching::match_strategies;
use crate::domain::entities::profile::Profile;
use crate::domain::error::DomainError;
use crate::domain::ports::content_library::{ContentLibrary, Estimate, ExampleScenario};
use crate::domain::ports::strategy_catalog::StrategyCatalog;
use crate::domain::values::impact::Impact;
use crate::domain::values::scoring_weights::ScoringWeights;
use crate::domain::values::strategy_category::StrategyCategory;

#[derive(Debug, Serialize)]
pub struct SummarySection {
    pub rank: usize,
    pub strategy_id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub category: StrategyCategory,
    pub advisor_questions: Vec<String>,
    pub scenario: ExampleScenario,
    pub estimate: Estimate,
}

#[derive(Debug, Serialize)]
pub struct PlanningSummary {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub catalog_version: String,
    pub profile: Profile,
    pub total_matches: usize,
    pub sections: Vec<SummarySection>,
}

pub struct SummaryUseCase {
    catalog: Arc<dyn StrategyCatalog>,
    content: Arc<dyn ContentLibrary>,
    weights: ScoringWeights,
}

impl SummaryUseCase {
    pub fn new(
        catalog: Arc<dyn StrategyCatalog>,
        content: Arc<dyn ContentLibrary>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            catalog,
            content,
            weights,
        }
    }

    /// Build a summary of the `top_n` highest-ranked strategies.
    pub fn execute(&self, profile: &Profile, top_n: usize) -> Result<PlanningSummary, DomainError> {
        if top_n == 0 {
            return Err(DomainError::InvalidInput("top must be at least 1".into()));
        }

        let matches = match_strategies(self.catalog.strategies(), profile, &self.weights);
        let total_matches = matches.len();

        let sections = matches
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(i, m)| {
                let id = m.strategy.id.as_str();
                let advisor_questions = self.content.advisor_questions(id).questions;
                let scenario = self.content.example_scenario(id);
                let estimate = self.content.estimate_formula(id).estimate(profile);
                SummarySection {
                    rank: i + 1,
                    advisor_questions,
                    scenario,
                    estimate,
                    strategy_id: m.strategy.id,
                    title: m.strategy.title,
                    description: m.strategy.description,
                    impact: m.strategy.impact,
                    category: m.strategy.category,
                }
            })
            .collect();

        Ok(PlanningSummary {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            catalog_version: self.catalog.version().to_string(),
            profile: profile.clone(),
            total_matches,
            sections,
        })
    }
}

impl PlanningSummary {
    /// Render as a printable plain-text document.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PlanningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.profile;

        writeln!(f, "# Your Tax Planning Summary")?;
        writeln!(f)?;
        writeln!(
            f,
            "Generated {} | catalog {} | ref {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.catalog_version,
            self.id
        )?;
        writeln!(f)?;
        writeln!(f, "## Your profile")?;
        match p.age {
            Some(age) => writeln!(f, "- Age: {age}")?,
            None => writeln!(f, "- Age: not provided")?,
        }
        writeln!(f, "- Filing status: {}", p.marital_status)?;
        writeln!(f, "- Employment: {}", p.employment)?;
        writeln!(f, "- Retirement assets: {}", p.retirement_range.label())?;
        writeln!(f, "- Real estate equity: {}", p.real_estate_range.label())?;
        if p.transition.is_transition_year {
            writeln!(f, "- Income transition year: yes")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} strategies matched; showing the top {}.",
            self.total_matches,
            self.sections.len()
        )?;

        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{section}")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "This summary is educational and is not tax advice. Consult a qualified professional."
        )
    }
}

impl fmt::Display for SummarySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.rank, self.title)?;
        writeln!(f, "Impact: {} | Category: {}", self.impact, self.category)?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Estimated benefit: {}", describe_estimate(&self.estimate))?;
        writeln!(f)?;
        writeln!(f, "### {}", self.scenario.title)?;
        writeln!(f, "{}", self.scenario.narrative)?;
        writeln!(f)?;
        writeln!(f, "### Questions for your advisor")?;
        for q in &self.advisor_questions {
            writeln!(f, "- {q}")?;
        }
        Ok(())
    }
}

fn describe_estimate(estimate: &Estimate) -> String {
    match (estimate.low, estimate.high, &estimate.note) {
        (Some(low), Some(high), _) => format!("{} - {}", format_dollars(low), format_dollars(high)),
        (_, _, Some(note)) => note.clone(),
        _ => "varies".to_string(),
    }
}

/// Whole-dollar amount with thousands separators.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
