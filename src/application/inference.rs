//! Inference table for answers the questionnaire never asked.
//!
//! Each rule is a named pure function of already-normalized answers. The
//! normalizer applies a rule only when the user gave no explicit answer for
//! the field it covers.

use serde::Serialize;

use crate::domain::values::charitable_giving::CharitableGiving;
use crate::domain::values::employment_status::EmploymentStatus;
use crate::domain::values::retirement_range::RetirementRange;
use crate::domain::values::transition::TransitionTerm;

/// Normalized answers the rules read from.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceInput {
    pub retirement_range: RetirementRange,
    pub employment: EmploymentStatus,
    pub spouse_employment: Option<EmploymentStatus>,
    pub charitable_giving: CharitableGiving,
    /// Explicit transition-year answer, if any. Later rules chain off it.
    pub transition_year: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InferredDefaults {
    pub pre_tax_retirement: bool,
    pub employer_stock: bool,
    pub rental_real_estate: bool,
    pub business_ownership: bool,
    pub charitable_intent: bool,
    pub high_deductible_health_plan: bool,
    pub is_transition_year: bool,
    pub is_lower_income_year: bool,
    pub transition_term: Option<TransitionTerm>,
}

/// Anyone past the lowest retirement bracket almost certainly holds a
/// 401(k) or traditional IRA balance.
pub fn pre_tax_from_net_worth(range: RetirementRange) -> bool {
    range.index() >= 1
}

pub fn business_from_employment(
    employment: EmploymentStatus,
    spouse: Option<EmploymentStatus>,
) -> bool {
    employment.owns_business() || spouse.is_some_and(|s| s.owns_business())
}

pub fn charitable_from_giving(giving: CharitableGiving) -> bool {
    giving.has_intent()
}

pub fn transition_from_employment(employment: EmploymentStatus) -> bool {
    employment == EmploymentStatus::Unemployed
}

pub fn lower_income_from_transition(is_transition_year: bool) -> bool {
    is_transition_year
}

pub fn term_from_employment(
    employment: EmploymentStatus,
    is_transition_year: bool,
) -> Option<TransitionTerm> {
    if !is_transition_year {
        return None;
    }
    match employment {
        EmploymentStatus::Unemployed => Some(TransitionTerm::ShortTerm),
        EmploymentStatus::Retired => Some(TransitionTerm::LongTerm),
        _ => None,
    }
}

/// Apply every rule. Employer stock, rental property and HDHP coverage are
/// never guessed.
pub fn infer_defaults(input: &InferenceInput) -> InferredDefaults {
    let is_transition_year = input
        .transition_year
        .unwrap_or_else(|| transition_from_employment(input.employment));

    InferredDefaults {
        pre_tax_retirement: pre_tax_from_net_worth(input.retirement_range),
        employer_stock: false,
        rental_real_estate: false,
        business_ownership: business_from_employment(input.employment, input.spouse_employment),
        charitable_intent: charitable_from_giving(input.charitable_giving),
        high_deductible_health_plan: false,
        is_transition_year,
        is_lower_income_year: lower_income_from_transition(is_transition_year),
        transition_term: term_from_employment(input.employment, is_transition_year),
    }
}
