use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

/// How long the current lower-income stretch is expected to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionTerm {
    ShortTerm,
    LongTerm,
}

impl TransitionTerm {
    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "short-term" | "short" | "shortterm" | "temporary" => Some(Self::ShortTerm),
            "long-term" | "long" | "longterm" | "permanent" => Some(Self::LongTerm),
            _ => None,
        }
    }
}

impl fmt::Display for TransitionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortTerm => write!(f, "short-term"),
            Self::LongTerm => write!(f, "long-term"),
        }
    }
}

impl FromStr for TransitionTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Unknown transition term: {s}"))
    }
}
