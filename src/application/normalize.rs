//! Profile normalizer.
//!
//! Turns raw questionnaire answers into a canonical [`Profile`]. Unknown
//! values never fail the session: they degrade to the most conservative
//! choice (lowest tier, `false`) and leave a warning in the log.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::inference::{infer_defaults, InferenceInput};
use crate::domain::entities::profile::{Profile, SituationFlags, TransitionStatus};
use crate::domain::values::charitable_giving::CharitableGiving;
use crate::domain::values::employment_status::EmploymentStatus;
use crate::domain::values::marital_status::MaritalStatus;
use crate::domain::values::real_estate_range::RealEstateRange;
use crate::domain::values::retirement_range::RetirementRange;
use crate::domain::values::transition::TransitionTerm;

/// Oldest age accepted as a real answer.
pub const MAX_AGE: u32 = 120;

/// Age arrives as a number from newer forms and as a string from older ones.
/// Anything else is kept as `Other` and treated as unanswered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeAnswer {
    Number(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

/// Questionnaire answers as submitted, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    pub age: Option<AgeAnswer>,
    #[serde(alias = "maritalStatus", deserialize_with = "lenient_text")]
    pub marital_status: Option<String>,
    #[serde(alias = "employmentStatus", deserialize_with = "lenient_text")]
    pub employment_status: Option<String>,
    #[serde(alias = "spouseEmploymentStatus", alias = "spouse_employment", deserialize_with = "lenient_text")]
    pub spouse_employment_status: Option<String>,
    #[serde(alias = "retirementRange", alias = "netWorth", alias = "net_worth", deserialize_with = "lenient_text")]
    pub retirement_range: Option<String>,
    #[serde(alias = "realEstateRange", alias = "realEstateEquity", deserialize_with = "lenient_text")]
    pub real_estate_range: Option<String>,
    #[serde(alias = "charitableGiving", deserialize_with = "lenient_text")]
    pub charitable_giving: Option<String>,
    #[serde(alias = "hasPreTaxRetirement", alias = "hasPretaxAccounts", deserialize_with = "lenient_flag")]
    pub has_pre_tax_retirement: Option<bool>,
    #[serde(alias = "hasEmployerStock", deserialize_with = "lenient_flag")]
    pub has_employer_stock: Option<bool>,
    #[serde(alias = "hasRentalRealEstate", alias = "hasRentalProperty", deserialize_with = "lenient_flag")]
    pub has_rental_real_estate: Option<bool>,
    #[serde(alias = "hasBusinessOwnership", alias = "hasBusiness", deserialize_with = "lenient_flag")]
    pub has_business_ownership: Option<bool>,
    #[serde(alias = "hasCharitableIntent", deserialize_with = "lenient_flag")]
    pub has_charitable_intent: Option<bool>,
    #[serde(alias = "hasHighDeductibleHealthPlan", alias = "hasHdhp", deserialize_with = "lenient_flag")]
    pub has_high_deductible_health_plan: Option<bool>,
    #[serde(alias = "isTransitionYear", deserialize_with = "lenient_flag")]
    pub is_transition_year: Option<bool>,
    #[serde(alias = "isLowerIncomeYear", alias = "lowerIncomeThisYear", deserialize_with = "lenient_flag")]
    pub is_lower_income_year: Option<bool>,
    #[serde(alias = "transitionTerm", alias = "transitionType", deserialize_with = "lenient_text")]
    pub transition_term: Option<String>,
}

/// Build the canonical profile. Total: never fails.
pub fn normalize_profile(raw: &RawAnswers) -> Profile {
    let age = raw.age.as_ref().and_then(normalize_age);

    let marital_status = lenient(
        "marital_status",
        raw.marital_status.as_deref(),
        MaritalStatus::normalize,
    );
    let employment = lenient(
        "employment_status",
        raw.employment_status.as_deref(),
        EmploymentStatus::normalize,
    );
    let spouse_employment = match marital_status {
        MaritalStatus::Married => raw
            .spouse_employment_status
            .as_deref()
            .map(|s| lenient("spouse_employment_status", Some(s), EmploymentStatus::normalize)),
        MaritalStatus::Single => {
            if raw.spouse_employment_status.is_some() {
                debug!("ignoring spouse employment for single filer");
            }
            None
        }
    };
    let retirement_range = lenient(
        "retirement_range",
        raw.retirement_range.as_deref(),
        RetirementRange::normalize,
    );
    let real_estate_range = lenient(
        "real_estate_range",
        raw.real_estate_range.as_deref(),
        RealEstateRange::normalize,
    );
    let charitable_giving = lenient(
        "charitable_giving",
        raw.charitable_giving.as_deref(),
        CharitableGiving::normalize,
    );

    let inferred = infer_defaults(&InferenceInput {
        retirement_range,
        employment,
        spouse_employment,
        charitable_giving,
        transition_year: raw.is_transition_year,
    });

    let flags = SituationFlags {
        pre_tax_retirement: Some(resolve(
            "pre_tax_from_net_worth",
            raw.has_pre_tax_retirement,
            inferred.pre_tax_retirement,
        )),
        employer_stock: Some(resolve(
            "employer_stock_default",
            raw.has_employer_stock,
            inferred.employer_stock,
        )),
        rental_real_estate: Some(resolve(
            "rental_real_estate_default",
            raw.has_rental_real_estate,
            inferred.rental_real_estate,
        )),
        business_ownership: Some(resolve(
            "business_from_employment",
            raw.has_business_ownership,
            inferred.business_ownership,
        )),
        charitable_intent: Some(resolve(
            "charitable_from_giving",
            raw.has_charitable_intent,
            inferred.charitable_intent,
        )),
        high_deductible_health_plan: Some(resolve(
            "hdhp_default",
            raw.has_high_deductible_health_plan,
            inferred.high_deductible_health_plan,
        )),
    };

    let is_transition_year = inferred.is_transition_year;
    let is_lower_income_year = resolve(
        "lower_income_from_transition",
        raw.is_lower_income_year,
        inferred.is_lower_income_year,
    );
    let term = if is_transition_year {
        match raw.transition_term.as_deref() {
            Some(s) => TransitionTerm::normalize(s).or_else(|| {
                warn!(field = "transition_term", value = s, "unrecognized value, inferring");
                inferred.transition_term
            }),
            None => inferred.transition_term,
        }
    } else {
        None
    };

    Profile {
        age,
        marital_status,
        employment,
        spouse_employment,
        retirement_range,
        real_estate_range,
        charitable_giving,
        flags,
        transition: TransitionStatus {
            is_transition_year,
            is_lower_income_year,
            term,
        },
    }
}

fn normalize_age(answer: &AgeAnswer) -> Option<u32> {
    let value = match answer {
        AgeAnswer::Number(n) => Some(*n),
        AgeAnswer::Float(f) => whole_number(*f),
        AgeAnswer::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        AgeAnswer::Other(_) => None,
    };
    match value {
        Some(n) if (0..=MAX_AGE as i64).contains(&n) => Some(n as u32),
        _ => {
            warn!(field = "age", value = ?answer, "unusable age, treating as unanswered");
            None
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64).then_some(f as i64)
}

/// Yes/no answers. Older forms sent `"yes"`, `"true"` or `1`; anything
/// unrecognizable becomes unanswered so inference can take over.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let flag = match &value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(true),
            "no" | "n" | "false" | "0" => Some(false),
            _ => None,
        },
        Value::Array(_) | Value::Object(_) => None,
    };
    if flag.is_none() && !value.is_null() {
        warn!(value = %value, "unrecognized yes/no answer, treating as unanswered");
    }
    Ok(flag)
}

/// Free-text answers for the enum fields. Scalars are stringified and left to
/// the per-type normalizer; structured values are dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => {
            warn!(value = %value, "structured value where text was expected, ignoring");
            None
        }
    })
}

/// Parse a loosely-typed answer, falling back to the type's default.
fn lenient<T, F>(field: &str, raw: Option<&str>, parse: F) -> T
where
    T: Default,
    F: Fn(&str) -> Option<T>,
{
    match raw {
        None => T::default(),
        Some(s) => parse(s).unwrap_or_else(|| {
            warn!(field, value = s, "unrecognized value, using conservative default");
            T::default()
        }),
    }
}

fn resolve(rule: &str, explicit: Option<bool>, inferred: bool) -> bool {
    match explicit {
        Some(v) => v,
        None => {
            debug!(rule, value = inferred, "applied inference rule");
            inferred
        }
    }
}
