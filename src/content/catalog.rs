//! The load-once content catalog

use serde::{Deserialize, Serialize};

use super::item::{ItemId, Post, Project};

/// The full content collection, loaded once at startup
///
/// Immutable after load: every filter operation is a pure projection
/// returning borrowed views, never a mutation of the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Look up a post by id
    pub fn post(&self, id: &ItemId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Get the previous post in natural catalog order
    pub fn prev_post(&self, id: &ItemId) -> Option<&Post> {
        let pos = self.posts.iter().position(|p| &p.id == id)?;
        if pos > 0 {
            Some(&self.posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next post in natural catalog order
    pub fn next_post(&self, id: &ItemId) -> Option<&Post> {
        let pos = self.posts.iter().position(|p| &p.id == id)?;
        if pos < self.posts.len() - 1 {
            Some(&self.posts[pos + 1])
        } else {
            None
        }
    }

    /// Posts sharing at least one tag with the given post
    ///
    /// Excludes the post itself, keeps catalog order, truncates to
    /// `limit`.
    pub fn related_posts(&self, id: &ItemId, limit: usize) -> Vec<&Post> {
        let Some(post) = self.post(id) else {
            return Vec::new();
        };
        self.posts
            .iter()
            .filter(|p| &p.id != id && p.tags.iter().any(|t| post.tags.contains(t)))
            .take(limit)
            .collect()
    }
}
