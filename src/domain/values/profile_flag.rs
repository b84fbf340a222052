use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boolean situational facts a trigger can require of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileFlag {
    PreTaxRetirement,
    EmployerStock,
    RentalRealEstate,
    BusinessOwnership,
    CharitableIntent,
    TransitionYear,
    LowerIncomeYear,
    HighDeductibleHealthPlan,
}

impl ProfileFlag {
    pub const ALL: [ProfileFlag; 8] = [
        ProfileFlag::PreTaxRetirement,
        ProfileFlag::EmployerStock,
        ProfileFlag::RentalRealEstate,
        ProfileFlag::BusinessOwnership,
        ProfileFlag::CharitableIntent,
        ProfileFlag::TransitionYear,
        ProfileFlag::LowerIncomeYear,
        ProfileFlag::HighDeductibleHealthPlan,
    ];
}

impl fmt::Display for ProfileFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileFlag::PreTaxRetirement => "pre-tax-retirement",
            ProfileFlag::EmployerStock => "employer-stock",
            ProfileFlag::RentalRealEstate => "rental-real-estate",
            ProfileFlag::BusinessOwnership => "business-ownership",
            ProfileFlag::CharitableIntent => "charitable-intent",
            ProfileFlag::TransitionYear => "transition-year",
            ProfileFlag::LowerIncomeYear => "lower-income-year",
            ProfileFlag::HighDeductibleHealthPlan => "high-deductible-health-plan",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ProfileFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase().replace('_', "-");
        ProfileFlag::ALL
            .into_iter()
            .find(|flag| flag.to_string() == key)
            .ok_or_else(|| format!("Unknown profile flag: {s}"))
    }
}
