use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

/// Employment situation of one spouse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    #[default]
    Employed,
    SelfEmployed,
    BusinessOwner,
    Unemployed,
    Retired,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::BusinessOwner,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Retired,
    ];

    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "employed" | "w2" | "w-2" | "full-time" | "part-time" => Some(Self::Employed),
            "self-employed" | "selfemployed" | "freelance" | "contractor" | "1099" => {
                Some(Self::SelfEmployed)
            }
            "business-owner" | "businessowner" | "owner" => Some(Self::BusinessOwner),
            "unemployed" | "between-jobs" | "laid-off" | "sabbatical" => Some(Self::Unemployed),
            "retired" => Some(Self::Retired),
            _ => None,
        }
    }

    /// Self-employment and business ownership both imply business income.
    pub fn owns_business(&self) -> bool {
        matches!(self, Self::SelfEmployed | Self::BusinessOwner)
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employed => write!(f, "employed"),
            Self::SelfEmployed => write!(f, "self-employed"),
            Self::BusinessOwner => write!(f, "business-owner"),
            Self::Unemployed => write!(f, "unemployed"),
            Self::Retired => write!(f, "retired"),
        }
    }
}

impl FromStr for EmploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Unknown employment status: {s}"))
    }
}
