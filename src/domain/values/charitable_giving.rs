use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharitableGiving {
    #[default]
    None,
    Occasional,
    Regular,
    Significant,
}

impl CharitableGiving {
    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "none" | "no" | "never" => Some(Self::None),
            "occasional" | "sometimes" | "some" => Some(Self::Occasional),
            "regular" | "yes" | "annual" => Some(Self::Regular),
            "significant" | "major" | "substantial" => Some(Self::Significant),
            _ => Option::None,
        }
    }

    pub fn has_intent(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for CharitableGiving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Occasional => write!(f, "occasional"),
            Self::Regular => write!(f, "regular"),
            Self::Significant => write!(f, "significant"),
        }
    }
}

impl FromStr for CharitableGiving {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Unknown charitable giving level: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent() {
        assert!(!CharitableGiving::None.has_intent());
        assert!(CharitableGiving::Occasional.has_intent());
        assert_eq!(CharitableGiving::normalize("Major"), Some(CharitableGiving::Significant));
        assert_eq!(CharitableGiving::normalize("maybe"), Option::None);
    }
}
