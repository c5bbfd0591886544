//! Content module - the catalog data model, loader, and markdown renderer

mod catalog;
mod item;
pub mod loader;
pub mod markdown;

pub use catalog::Catalog;
pub use item::{ContentItem, ItemId, Post, Project};
