//! Eligibility triggers.
//!
//! A closed set of predicates over a [`Profile`](crate::domain::entities::profile::Profile).
//! Each catalog entry lists zero or more triggers; all of them must hold for
//! the entry to be shown. Evaluation lives in `application::eligibility`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::employment_status::EmploymentStatus;
use super::marital_status::MaritalStatus;
use super::profile_flag::ProfileFlag;
use super::transition::TransitionTerm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Trigger {
    /// Inclusive lower age bound.
    AgeAtLeast(u32),
    /// Inclusive upper age bound.
    AgeAtMost(u32),
    MaritalStatusIn(Vec<MaritalStatus>),
    /// Matches on the primary earner's employment.
    EmploymentStatusIn(Vec<EmploymentStatus>),
    RequiresFlag(ProfileFlag),
    TransitionTermIs(TransitionTerm),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::AgeAtLeast(age) => write!(f, "age >= {age}"),
            Trigger::AgeAtMost(age) => write!(f, "age <= {age}"),
            Trigger::MaritalStatusIn(set) => write!(f, "marital status in [{}]", join(set)),
            Trigger::EmploymentStatusIn(set) => write!(f, "employment in [{}]", join(set)),
            Trigger::RequiresFlag(flag) => write!(f, "requires {flag}"),
            Trigger::TransitionTermIs(term) => write!(f, "{term} transition"),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_adjacently_tagged() {
        let t = Trigger::RequiresFlag(ProfileFlag::CharitableIntent);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["kind"], "requires_flag");
        assert_eq!(json["value"], "charitable-intent");

        let parsed: Trigger =
            serde_json::from_str(r#"{"kind":"marital_status_in","value":["married"]}"#).unwrap();
        assert_eq!(parsed, Trigger::MaritalStatusIn(vec![MaritalStatus::Married]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Trigger::AgeAtMost(65).to_string(), "age <= 65");
        assert_eq!(
            Trigger::EmploymentStatusIn(vec![EmploymentStatus::Employed, EmploymentStatus::Retired])
                .to_string(),
            "employment in [employed, retired]"
        );
    }
}
