use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 2] = [MaritalStatus::Single, MaritalStatus::Married];

    /// Lenient parse for questionnaire input. Unknown values fall back to
    /// `Single`, the status that unlocks the fewest joint-filing strategies.
    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "single" | "unmarried" | "divorced" | "widowed" => Some(Self::Single),
            "married" | "mfj" | "married-filing-jointly" | "partnered" => Some(Self::Married),
            _ => None,
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Married => write!(f, "married"),
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| {
            format!("Invalid marital status: '{s}'. Use 'single' or 'married'")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("Married".parse::<MaritalStatus>(), Ok(MaritalStatus::Married));
        assert_eq!(MaritalStatus::normalize("widowed"), Some(MaritalStatus::Single));
        assert!("complicated".parse::<MaritalStatus>().is_err());
    }
}
