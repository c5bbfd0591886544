//! Value-keyed memoization for filter results
//!
//! Rapid successive filter-state changes recompute the same
//! projections over and over; this cache keys results on
//! (collection fingerprint, filter state) so a repeated state is a
//! lookup instead of a scan. A cache hit is bit-identical to a fresh
//! `filter_items` call.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::content::ContentItem;
use crate::filter::FilterState;

/// Memo cache over filter results
///
/// Stores matching indices rather than references, so entries carry no
/// borrow of the collection. A fingerprint change (any edit to the
/// collection) drops all entries.
#[derive(Debug, Default)]
pub struct FilterCache {
    fingerprint: u64,
    entries: HashMap<FilterState, Vec<usize>>,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter through the cache
    pub fn filter<'a, T: ContentItem>(
        &mut self,
        items: &'a [T],
        state: &FilterState,
    ) -> Vec<&'a T> {
        let fingerprint = fingerprint_items(items);
        if fingerprint != self.fingerprint {
            self.entries.clear();
            self.fingerprint = fingerprint;
        }

        let indices = self.entries.entry(state.clone()).or_insert_with(|| {
            let term = state.search_term.trim().to_lowercase();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| super::matches_state(*item, &state.active_tag, &term))
                .map(|(i, _)| i)
                .collect()
        });

        indices.iter().map(|&i| &items[i]).collect()
    }

    /// Number of memoized filter states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hash the fields the filter engine reads
fn fingerprint_items<T: ContentItem>(items: &[T]) -> u64 {
    let mut hasher = DefaultHasher::new();
    items.len().hash(&mut hasher);
    for item in items {
        item.id().hash(&mut hasher);
        item.title().hash(&mut hasher);
        item.summary().hash(&mut hasher);
        item.content().hash(&mut hasher);
        item.tags().hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ItemId, Post};
    use crate::filter::{filter_items, FilterAction};

    fn post(id: i64, title: &str, tags: &[&str]) -> Post {
        Post {
            id: ItemId::Number(id),
            title: title.to_string(),
            summary: String::new(),
            content: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: String::new(),
            cover_image: None,
            additional_images: Vec::new(),
        }
    }

    #[test]
    fn test_hit_equals_direct_computation() {
        let posts = vec![
            post(1, "Arrival", &["DAY ONE"]),
            post(2, "Departure", &["DAY TWO"]),
        ];
        let state = FilterState::default().apply(FilterAction::SetTag("DAY ONE".to_string()));

        let mut cache = FilterCache::new();
        let first: Vec<_> = cache.filter(&posts, &state).iter().map(|p| p.id.clone()).collect();
        let second: Vec<_> = cache.filter(&posts, &state).iter().map(|p| p.id.clone()).collect();
        let direct: Vec<_> = filter_items(&posts, &state).iter().map(|p| p.id.clone()).collect();

        assert_eq!(first, direct);
        assert_eq!(second, direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_states_get_distinct_entries() {
        let posts = vec![post(1, "Arrival", &["DAY ONE"])];
        let mut cache = FilterCache::new();
        cache.filter(&posts, &FilterState::default());
        cache.filter(
            &posts,
            &FilterState::default().apply(FilterAction::SetSearchTerm("arrival".to_string())),
        );
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_collection_change_invalidates() {
        let posts = vec![post(1, "Arrival", &["DAY ONE"])];
        let mut cache = FilterCache::new();
        cache.filter(&posts, &FilterState::default());
        assert_eq!(cache.len(), 1);

        let grown = vec![
            post(1, "Arrival", &["DAY ONE"]),
            post(2, "Departure", &["DAY TWO"]),
        ];
        let all = cache.filter(&grown, &FilterState::default());
        assert_eq!(all.len(), 2);
        assert_eq!(cache.len(), 1);
    }
}
