pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::catalog::CatalogUseCase;
use crate::application::matching::{MatchOptions, MatchReport, MatchUseCase};
use crate::application::normalize::{normalize_profile, RawAnswers};
use crate::application::summary::{PlanningSummary, SummaryUseCase};
use crate::config::Config;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::content_library::ContentLibrary;
use crate::domain::ports::strategy_catalog::StrategyCatalog;
use crate::domain::values::scoring_weights::ScoringWeights;
use crate::domain::values::strategy_category::StrategyCategory;
use crate::infrastructure::catalog::json_catalog::JsonCatalog;
use crate::infrastructure::content::static_content::StaticContentLibrary;
use std::sync::Arc;

pub struct TaxPlan {
    match_uc: MatchUseCase,
    summary_uc: SummaryUseCase,
    catalog_uc: CatalogUseCase,
    summary_top: usize,
}

impl TaxPlan {
    /// Build from environment configuration, falling back to the built-in
    /// catalog and content tables.
    pub fn new() -> Result<Self, DomainError> {
        Self::from_config(&Config::from_env()?)
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let catalog: Arc<dyn StrategyCatalog> = match &config.catalog_path {
            Some(path) => Arc::new(JsonCatalog::from_path(path)?),
            None => Arc::new(JsonCatalog::builtin()?),
        };
        let content: Arc<dyn ContentLibrary> = match &config.content_path {
            Some(path) => Arc::new(StaticContentLibrary::from_path(path)?),
            None => Arc::new(StaticContentLibrary::builtin()?),
        };

        let mut plan = Self::with_sources(catalog, content, ScoringWeights::default());
        plan.summary_top = config.summary_top;
        Ok(plan)
    }

    pub fn with_sources(
        catalog: Arc<dyn StrategyCatalog>,
        content: Arc<dyn ContentLibrary>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            match_uc: MatchUseCase::new(catalog.clone(), weights.clone()),
            summary_uc: SummaryUseCase::new(catalog.clone(), content, weights),
            catalog_uc: CatalogUseCase::new(catalog),
            summary_top: Config::default().summary_top,
        }
    }

    // Delegating methods
    pub fn normalize(&self, raw: &RawAnswers) -> Profile {
        normalize_profile(raw)
    }

    pub fn match_profile(&self, profile: &Profile, options: &MatchOptions) -> Result<MatchReport, DomainError> {
        self.match_uc.execute(profile, options)
    }

    pub fn match_answers(&self, raw: &RawAnswers, options: &MatchOptions) -> Result<MatchReport, DomainError> {
        self.match_uc.execute(&normalize_profile(raw), options)
    }

    /// `top` defaults to the configured summary size.
    pub fn summary(&self, raw: &RawAnswers, top: Option<usize>) -> Result<PlanningSummary, DomainError> {
        let profile = normalize_profile(raw);
        self.summary_uc.execute(&profile, top.unwrap_or(self.summary_top))
    }

    pub fn catalog(&self, category: Option<StrategyCategory>) -> Vec<StrategyRecord> {
        self.catalog_uc.list(category)
    }

    pub fn strategy(&self, id: &str) -> Result<StrategyRecord, DomainError> {
        self.catalog_uc.show(id)
    }

    pub fn catalog_version(&self) -> String {
        self.catalog_uc.version()
    }
}
