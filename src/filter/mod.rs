//! Tag and search filtering over the content catalog
//!
//! Every operation here is a pure projection: it borrows the source
//! slice and returns matching references in source order, never
//! mutating or re-sorting the collection. An empty result is a normal
//! value, not an error.

pub mod cache;
pub mod state;

pub use cache::FilterCache;
pub use state::{FilterAction, FilterState};

use indexmap::IndexMap;

use crate::content::ContentItem;

/// Sentinel tag meaning "no tag restriction"
pub const ALL_TAG: &str = "All";

/// Filter items by tag
///
/// The "All" sentinel matches everything; otherwise an item matches
/// when its tag sequence contains `tag` exactly (case-sensitive).
pub fn filter_by_tag<'a, T: ContentItem>(items: &'a [T], tag: &str) -> Vec<&'a T> {
    if tag == ALL_TAG {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.tags().iter().any(|t| t == tag))
        .collect()
}

/// Filter items by free-text search
///
/// A term that trims to empty matches everything. Otherwise the
/// lowercased term must be a substring of the lowercased title,
/// summary, content (skipped when absent), or any tag. Pure substring
/// containment, no tokenization or fuzziness.
pub fn filter_by_search<'a, T: ContentItem>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| matches_search(*item, &term))
        .collect()
}

/// Apply tag and search constraints in one conjunctive pass
///
/// Result order is always the source order restricted to the matching
/// subset; the two predicates are independent, so a single pass equals
/// filtering by tag then by search.
pub fn filter_items<'a, T: ContentItem>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let term = state.search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_state(*item, &state.active_tag, &term))
        .collect()
}

/// The tag universe: "All" first, then every distinct tag in
/// first-seen order across items in collection order
///
/// Always computed from the full collection, so the universe never
/// shrinks as filters are applied.
pub fn available_tags<T: ContentItem>(items: &[T]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_string()];
    for item in items {
        for tag in item.tags() {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Count items per tag, first-seen order
pub fn tag_counts<T: ContentItem>(items: &[T]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for item in items {
        for tag in item.tags() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn matches_search<T: ContentItem>(item: &T, term_lower: &str) -> bool {
    item.title().to_lowercase().contains(term_lower)
        || item.summary().to_lowercase().contains(term_lower)
        || item
            .content()
            .is_some_and(|c| c.to_lowercase().contains(term_lower))
        || item
            .tags()
            .iter()
            .any(|t| t.to_lowercase().contains(term_lower))
}

fn matches_state<T: ContentItem>(item: &T, tag: &str, term_lower: &str) -> bool {
    let tag_ok = tag == ALL_TAG || item.tags().iter().any(|t| t == tag);
    let term_ok = term_lower.is_empty() || matches_search(item, term_lower);
    tag_ok && term_ok
}
