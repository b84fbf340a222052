//! Strategy catalog port.
//!
//! The catalog is the fixed universe the eligibility filter iterates over.
//! It is injected into the use cases so tests can run against synthetic
//! catalogs; implementations must never mutate entries after construction.

use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::values::strategy_category::StrategyCategory;

pub trait StrategyCatalog: Send + Sync {
    /// Version label of the loaded catalog, carried into generated summaries.
    fn version(&self) -> &str;

    /// All entries in authoring order.
    fn strategies(&self) -> &[StrategyRecord];

    fn get(&self, id: &str) -> Option<&StrategyRecord> {
        self.strategies().iter().find(|s| s.id == id)
    }

    fn by_category(&self, category: StrategyCategory) -> Vec<&StrategyRecord> {
        self.strategies()
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}
