use std::sync::Arc;

use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_catalog::StrategyCatalog;
use crate::domain::values::strategy_category::StrategyCategory;

/// Read-only browsing of the loaded catalog.
pub struct CatalogUseCase {
    catalog: Arc<dyn StrategyCatalog>,
}

impl CatalogUseCase {
    pub fn new(catalog: Arc<dyn StrategyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn list(&self, category: Option<StrategyCategory>) -> Vec<StrategyRecord> {
        match category {
            Some(c) => self.catalog.by_category(c).into_iter().cloned().collect(),
            None => self.catalog.strategies().to_vec(),
        }
    }

    pub fn show(&self, id: &str) -> Result<StrategyRecord, DomainError> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("strategy '{id}'")))
    }

    pub fn version(&self) -> String {
        self.catalog.version().to_string()
    }
}
