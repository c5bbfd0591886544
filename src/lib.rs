//! folio-rs: content core for a personal portfolio and travel blog
//!
//! This crate provides the constrained markdown renderer, the
//! tag/search filter engine, and the catalog data model behind a
//! portfolio site, plus a small CLI that exercises them.

pub mod commands;
pub mod config;
pub mod content;
pub mod filter;
pub mod helpers;

use anyhow::{Context, Result};
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("folio.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Load the content catalog from the configured data file
    pub fn load_catalog(&self) -> Result<content::Catalog> {
        let path = self.base_dir.join(&self.config.data_file);
        content::loader::load_catalog(&path)
            .with_context(|| format!("loading catalog from {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.title, "Portfolio");
    }

    #[test]
    fn test_new_reads_folio_yml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("folio.yml"), "title: Wanderlog\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.title, "Wanderlog");
    }

    #[test]
    fn test_load_catalog_resolves_data_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("content.yml"),
            "posts:\n  - id: 1\n    title: Arrival\n    summary: a\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let catalog = folio.load_catalog().unwrap();
        assert_eq!(catalog.posts.len(), 1);
    }
}
