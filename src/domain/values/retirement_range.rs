//! Retirement-account net-worth bracket.
//!
//! Six ordered tiers. The tier drives score weighting and inference of
//! pre-tax account ownership; it is never an eligibility gate on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RetirementRange {
    #[default]
    #[serde(rename = "<250k")]
    Under250k,
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    #[serde(rename = "500k-1m", alias = "500k-1M")]
    From500kTo1m,
    #[serde(rename = "1m-2.5m", alias = "1M-2.5M")]
    From1mTo2_5m,
    #[serde(rename = "2.5m-5m", alias = "2.5M-5M")]
    From2_5mTo5m,
    #[serde(rename = "5m+", alias = "5M+")]
    Over5m,
}

impl RetirementRange {
    /// All tiers in ascending order.
    pub const ALL: [RetirementRange; 6] = [
        RetirementRange::Under250k,
        RetirementRange::From250kTo500k,
        RetirementRange::From500kTo1m,
        RetirementRange::From1mTo2_5m,
        RetirementRange::From2_5mTo5m,
        RetirementRange::Over5m,
    ];

    /// Zero-based rank of the tier.
    pub fn index(&self) -> usize {
        match self {
            Self::Under250k => 0,
            Self::From250kTo500k => 1,
            Self::From500kTo1m => 2,
            Self::From1mTo2_5m => 3,
            Self::From2_5mTo5m => 4,
            Self::Over5m => 5,
        }
    }

    /// Representative balance in dollars, used for personalized estimates.
    pub fn midpoint(&self) -> f64 {
        match self {
            Self::Under250k => 125_000.0,
            Self::From250kTo500k => 375_000.0,
            Self::From500kTo1m => 750_000.0,
            Self::From1mTo2_5m => 1_750_000.0,
            Self::From2_5mTo5m => 3_750_000.0,
            Self::Over5m => 7_500_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under250k => "Under $250K",
            Self::From250kTo500k => "$250K - $500K",
            Self::From500kTo1m => "$500K - $1M",
            Self::From1mTo2_5m => "$1M - $2.5M",
            Self::From2_5mTo5m => "$2.5M - $5M",
            Self::Over5m => "$5M+",
        }
    }

    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "<250k" | "under250k" | "under-250k" | "0-250k" | "lt250k" => Some(Self::Under250k),
            "250k-500k" | "250-500k" => Some(Self::From250kTo500k),
            "500k-1m" | "500k-1000k" | "500-1m" => Some(Self::From500kTo1m),
            "1m-2.5m" | "1-2.5m" => Some(Self::From1mTo2_5m),
            "2.5m-5m" | "2.5-5m" => Some(Self::From2_5mTo5m),
            "5m+" | "5m-plus" | "5mplus" | "over5m" | ">5m" => Some(Self::Over5m),
            _ => None,
        }
    }
}

impl fmt::Display for RetirementRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under250k => write!(f, "<250k"),
            Self::From250kTo500k => write!(f, "250k-500k"),
            Self::From500kTo1m => write!(f, "500k-1m"),
            Self::From1mTo2_5m => write!(f, "1m-2.5m"),
            Self::From2_5mTo5m => write!(f, "2.5m-5m"),
            Self::Over5m => write!(f, "5m+"),
        }
    }
}

impl FromStr for RetirementRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Unknown retirement range: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, tier) in RetirementRange::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
        assert!(RetirementRange::Over5m > RetirementRange::Under250k);
    }

    #[test]
    fn test_case_variants_collapse() {
        assert_eq!(
            RetirementRange::normalize("500k-1M"),
            RetirementRange::normalize("500k-1m")
        );
        assert_eq!(
            RetirementRange::normalize("$1M - $2.5M"),
            Some(RetirementRange::From1mTo2_5m)
        );
    }

    #[test]
    fn test_dropped_decimal_is_not_a_tier() {
        assert_eq!(RetirementRange::normalize("1m-25m"), None);
        assert_eq!(RetirementRange::normalize("2.5M-5M"), Some(RetirementRange::From2_5mTo5m));
    }

    #[test]
    fn test_serde_uses_bracket_labels() {
        let json = serde_json::to_string(&RetirementRange::From1mTo2_5m).unwrap();
        assert_eq!(json, "\"1m-2.5m\"");
        let parsed: RetirementRange = serde_json::from_str("\"500k-1M\"").unwrap();
        assert_eq!(parsed, RetirementRange::From500kTo1m);
    }
}
