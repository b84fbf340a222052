pub mod content_library;
pub mod strategy_catalog;
