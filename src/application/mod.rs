pub mod catalog;
pub mod eligibility;
pub mod inference;
pub mod matching;
pub mod normalize;
pub mod scoring;
pub mod summary;
