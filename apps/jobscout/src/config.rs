use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::PipelineError;

/// Keyword phrase lists controlling relevance filtering. All lists are
/// optional; an empty list falls back to that rule's documented default
/// (or, for `entry_keywords`, to no constraint at all).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub include_keywords: Vec<String>,
    #[serde(default)]
    pub remote_keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub entry_keywords: Vec<String>,
}

/// The sources file: which boards to discover from, and how to filter.
///
/// `lever_companies` are Lever posting-API company slugs.
/// `greenhouse_boards` accepts bare board slugs or full board URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub lever_companies: Vec<String>,
    #[serde(default)]
    pub greenhouse_boards: Vec<String>,
}

impl SourcesConfig {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Runtime settings loaded from environment variables, with defaults
/// suitable for local runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "45".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_config_parses_full_shape() {
        let json = r#"{
            "filters": {
                "include_keywords": ["qa", "test automation"],
                "remote_keywords": ["remote"],
                "exclude_keywords": ["principal"],
                "entry_keywords": []
            },
            "lever_companies": ["acme"],
            "greenhouse_boards": ["https://boards.greenhouse.io/globex"]
        }"#;
        let config: SourcesConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.filters.include_keywords.len(), 2);
        assert_eq!(config.lever_companies, vec!["acme"]);
        assert_eq!(config.greenhouse_boards.len(), 1);
    }

    #[test]
    fn test_sources_config_all_keys_optional() {
        let config: SourcesConfig = serde_json::from_str("{}").unwrap();
        assert!(config.filters.remote_keywords.is_empty());
        assert!(config.lever_companies.is_empty());
        assert!(config.greenhouse_boards.is_empty());
    }
}
