//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Content
    /// Path to the catalog data file, relative to the base directory
    pub data_file: String,
    /// Character limit for summaries in list views
    pub summary_length: usize,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            data_file: "content.yml".to_string(),
            summary_length: 120,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.data_file, "content.yml");
        assert_eq!(config.summary_length, 120);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Wanderlog
author: Test User
data_file: data/content.json
summary_length: 80
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Wanderlog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.data_file, "data/content.json");
        assert_eq!(config.summary_length, 80);
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let yaml = r#"
title: Wanderlog
social_github: example
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("social_github"));
    }
}
