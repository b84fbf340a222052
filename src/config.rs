use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog overriding the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// JSON content tables overriding the built-in ones.
    pub content_path: Option<PathBuf>,
    pub log_level: String,
    pub summary_top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            content_path: None,
            log_level: "warn".to_string(),
            summary_top: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let summary_top = match non_empty("TAXPLAN_SUMMARY_TOP") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    DomainError::InvalidInput(format!(
                        "TAXPLAN_SUMMARY_TOP must be a positive integer, got '{v}'"
                    ))
                })?,
            None => defaults.summary_top,
        };

        Ok(Config {
            catalog_path: non_empty("TAXPLAN_CATALOG").map(PathBuf::from),
            content_path: non_empty("TAXPLAN_CONTENT").map(PathBuf::from),
            log_level: non_empty("TAXPLAN_LOG").unwrap_or(defaults.log_level),
            summary_top,
        })
    }
}
