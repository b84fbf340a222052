use serde::{Deserialize, Serialize};

use crate::domain::values::charitable_giving::CharitableGiving;
use crate::domain::values::employment_status::EmploymentStatus;
use crate::domain::values::marital_status::MaritalStatus;
use crate::domain::values::profile_flag::ProfileFlag;
use crate::domain::values::real_estate_range::RealEstateRange;
use crate::domain::values::retirement_range::RetirementRange;
use crate::domain::values::transition::TransitionTerm;

/// Situational answers. `None` means the question was never answered and no
/// inference rule covered it; triggers treat that as "not satisfied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationFlags {
    pub pre_tax_retirement: Option<bool>,
    pub employer_stock: Option<bool>,
    pub rental_real_estate: Option<bool>,
    pub business_ownership: Option<bool>,
    pub charitable_intent: Option<bool>,
    pub high_deductible_health_plan: Option<bool>,
}

/// Derived income-transition state for the current tax year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStatus {
    pub is_transition_year: bool,
    pub is_lower_income_year: bool,
    pub term: Option<TransitionTerm>,
}

/// Canonical questionnaire profile consumed by the matching engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: Option<u32>,
    pub marital_status: MaritalStatus,
    pub employment: EmploymentStatus,
    pub spouse_employment: Option<EmploymentStatus>,
    pub retirement_range: RetirementRange,
    pub real_estate_range: RealEstateRange,
    pub charitable_giving: CharitableGiving,
    pub flags: SituationFlags,
    pub transition: TransitionStatus,
}

impl Profile {
    /// Look up a situational flag. Transition flags are always known.
    pub fn flag(&self, flag: ProfileFlag) -> Option<bool> {
        match flag {
            ProfileFlag::PreTaxRetirement => self.flags.pre_tax_retirement,
            ProfileFlag::EmployerStock => self.flags.employer_stock,
            ProfileFlag::RentalRealEstate => self.flags.rental_real_estate,
            ProfileFlag::BusinessOwnership => self.flags.business_ownership,
            ProfileFlag::CharitableIntent => self.flags.charitable_intent,
            ProfileFlag::HighDeductibleHealthPlan => self.flags.high_deductible_health_plan,
            ProfileFlag::TransitionYear => Some(self.transition.is_transition_year),
            ProfileFlag::LowerIncomeYear => Some(self.transition.is_lower_income_year),
        }
    }

    pub fn is_unemployed(&self) -> bool {
        self.employment == EmploymentStatus::Unemployed
    }
}
