use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expected tax impact of a strategy, as judged by the catalog author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::High => write!(f, "high"),
            Impact::Medium => write!(f, "medium"),
            Impact::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Impact::High),
            "medium" | "med" => Ok(Impact::Medium),
            "low" => Ok(Impact::Low),
            _ => Err(format!("Unknown impact: {s}")),
        }
    }
}
