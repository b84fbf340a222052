use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyCategory {
    Retirement,
    Investment,
    RealEstate,
    Charitable,
    Business,
    Education,
    Healthcare,
    Estate,
}

impl fmt::Display for StrategyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyCategory::Retirement => write!(f, "retirement"),
            StrategyCategory::Investment => write!(f, "investment"),
            StrategyCategory::RealEstate => write!(f, "real-estate"),
            StrategyCategory::Charitable => write!(f, "charitable"),
            StrategyCategory::Business => write!(f, "business"),
            StrategyCategory::Education => write!(f, "education"),
            StrategyCategory::Healthcare => write!(f, "healthcare"),
            StrategyCategory::Estate => write!(f, "estate"),
        }
    }
}

impl FromStr for StrategyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "retirement" => Ok(StrategyCategory::Retirement),
            "investment" => Ok(StrategyCategory::Investment),
            "real-estate" | "realestate" => Ok(StrategyCategory::RealEstate),
            "charitable" => Ok(StrategyCategory::Charitable),
            "business" => Ok(StrategyCategory::Business),
            "education" => Ok(StrategyCategory::Education),
            "healthcare" | "health" => Ok(StrategyCategory::Healthcare),
            "estate" => Ok(StrategyCategory::Estate),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}
