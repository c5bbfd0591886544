//! Catalog loading
//!
//! The whole catalog lives in one static data file (YAML or JSON,
//! dispatched by extension) and is loaded once at startup. Data
//! quality problems - duplicate ids, unparseable dates - are warned
//! about but never rejected; the collection is served as-is.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::catalog::Catalog;
use crate::helpers::date::parse_date_string;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported catalog format {path:?} (expected .yml, .yaml, or .json)")]
    UnsupportedFormat { path: PathBuf },
}

/// Load the catalog from a data file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str());
    let catalog: Catalog = match ext {
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        Some("json") => serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    tracing::info!(
        "Loaded catalog from {:?}: {} posts, {} projects",
        path,
        catalog.posts.len(),
        catalog.projects.len()
    );
    check_data_quality(&catalog);

    Ok(catalog)
}

/// Warn about duplicate ids and unparseable dates; nothing is skipped
fn check_data_quality(catalog: &Catalog) {
    let mut seen = HashSet::new();
    for post in &catalog.posts {
        if !seen.insert(&post.id) {
            tracing::warn!("Duplicate post id: {}", post.id);
        }
        if !post.date.is_empty() && parse_date_string(&post.date).is_none() {
            tracing::warn!("Post {} has unparseable date: {:?}", post.id, post.date);
        }
    }

    let mut seen = HashSet::new();
    for project in &catalog.projects {
        if !seen.insert(&project.id) {
            tracing::warn!("Duplicate project id: {}", project.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "content.yml",
            r#"
posts:
  - id: 1
    title: Arrival
    summary: Landing in Manila
    tags: [DAY ONE]
    date: 2025-04-07
projects:
  - id: p1
    title: Portfolio
    description: This site
    technologies: [React, Vite]
"#,
        );

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.posts.len(), 1);
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.posts[0].title, "Arrival");
        assert_eq!(catalog.projects[0].technologies, ["React", "Vite"]);
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "content.json",
            r#"{
  "posts": [
    {"id": 1, "title": "Arrival", "summary": "Landing", "tags": ["DAY ONE"], "date": "2025-04-07", "coverImage": "/images/manila.jpg"}
  ]
}"#,
        );

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.posts.len(), 1);
        assert_eq!(
            catalog.posts[0].cover_image.as_deref(),
            Some("/images/manila.jpg")
        );
        assert!(catalog.projects.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "content.toml", "posts = []");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog("does-not-exist.yml").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_duplicate_ids_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "content.yml",
            r#"
posts:
  - id: 1
    title: First
    summary: a
  - id: 1
    title: Second
    summary: b
"#,
        );

        // duplicates warn but the catalog is served as-is
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.posts.len(), 2);
    }
}
