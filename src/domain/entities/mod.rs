pub mod matched_strategy;
pub mod profile;
pub mod strategy;
