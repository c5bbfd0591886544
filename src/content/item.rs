//! Post and Project models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a catalog item
///
/// Data files ported from the original site use numeric ids for blog
/// posts and string ids for some projects, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Compare against a raw string from the CLI or a route parameter
    ///
    /// Numeric ids match their decimal rendering ("3" finds Number(3));
    /// string ids compare exactly.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ItemId::Number(n) => raw.parse::<i64>() == Ok(*n),
            ItemId::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier, used for lookup
    pub id: ItemId,

    /// Post title
    pub title: String,

    /// Short display string, independent of the body
    pub summary: String,

    /// Long-form body in the constrained markdown dialect
    #[serde(default)]
    pub content: Option<String>,

    /// Post tags, insertion order preserved
    #[serde(default)]
    pub tags: Vec<String>,

    /// Date string ("2025-04-07" or "April 7, 2025"); display only,
    /// the catalog is pre-sorted and never re-sorted by date
    #[serde(default)]
    pub date: String,

    /// Cover image path, opaque to the core
    #[serde(default, alias = "coverImage")]
    pub cover_image: Option<String>,

    /// Additional image paths
    #[serde(default, alias = "additionalImages")]
    pub additional_images: Vec<String>,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier
    pub id: ItemId,

    /// Project title
    pub title: String,

    /// Short display string, plays the summary role
    pub description: String,

    /// Technologies used, play the tags role
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Image path, opaque to the core
    #[serde(default)]
    pub image: Option<String>,

    /// Source repository URL
    #[serde(default, alias = "repoLink")]
    pub repo_link: Option<String>,

    /// Deployed site URL
    #[serde(default, alias = "liveLink")]
    pub live_link: Option<String>,

    /// Whether the project is featured on the home page
    #[serde(default)]
    pub featured: bool,
}

/// Common view over posts and projects for the filter engine
///
/// Projects have no long-form body, so `content` is optional; the
/// search predicate skips it when absent.
pub trait ContentItem {
    fn id(&self) -> &ItemId;
    fn title(&self) -> &str;
    fn summary(&self) -> &str;
    fn content(&self) -> Option<&str>;
    fn tags(&self) -> &[String];
}

impl<T: ContentItem> ContentItem for &T {
    fn id(&self) -> &ItemId {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn summary(&self) -> &str {
        (**self).summary()
    }

    fn content(&self) -> Option<&str> {
        (**self).content()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}

impl ContentItem for Post {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl ContentItem for Project {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn content(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }
}
