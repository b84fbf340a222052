use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::canonical_key;

/// Real-estate equity bracket, five ordered tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RealEstateRange {
    #[default]
    #[serde(rename = "none")]
    NoEquity,
    #[serde(rename = "<500k")]
    Under500k,
    #[serde(rename = "500k-1m", alias = "500k-1M")]
    From500kTo1m,
    #[serde(rename = "1m-3m", alias = "1M-3M")]
    From1mTo3m,
    #[serde(rename = "3m+", alias = "3M+")]
    Over3m,
}

impl RealEstateRange {
    pub const ALL: [RealEstateRange; 5] = [
        RealEstateRange::NoEquity,
        RealEstateRange::Under500k,
        RealEstateRange::From500kTo1m,
        RealEstateRange::From1mTo3m,
        RealEstateRange::Over3m,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::NoEquity => 0,
            Self::Under500k => 1,
            Self::From500kTo1m => 2,
            Self::From1mTo3m => 3,
            Self::Over3m => 4,
        }
    }

    pub fn midpoint(&self) -> f64 {
        match self {
            Self::NoEquity => 0.0,
            Self::Under500k => 250_000.0,
            Self::From500kTo1m => 750_000.0,
            Self::From1mTo3m => 2_000_000.0,
            Self::Over3m => 4_500_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoEquity => "None",
            Self::Under500k => "Under $500K",
            Self::From500kTo1m => "$500K - $1M",
            Self::From1mTo3m => "$1M - $3M",
            Self::Over3m => "$3M+",
        }
    }

    pub fn normalize(raw: &str) -> Option<Self> {
        match canonical_key(raw).as_str() {
            "none" | "0" | "no" | "n/a" => Some(Self::NoEquity),
            "<500k" | "under500k" | "under-500k" | "0-500k" => Some(Self::Under500k),
            "500k-1m" | "500-1m" => Some(Self::From500kTo1m),
            "1m-3m" | "1-3m" => Some(Self::From1mTo3m),
            "3m+" | "3m-plus" | "3mplus" | "over3m" | ">3m" => Some(Self::Over3m),
            _ => None,
        }
    }
}

impl fmt::Display for RealEstateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEquity => write!(f, "none"),
            Self::Under500k => write!(f, "<500k"),
            Self::From500kTo1m => write!(f, "500k-1m"),
            Self::From1mTo3m => write!(f, "1m-3m"),
            Self::Over3m => write!(f, "3m+"),
        }
    }
}

impl FromStr for RealEstateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| format!("Unknown real estate range: {s}"))
    }
}
