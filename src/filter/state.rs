//! Filter state and its reducer

use crate::filter::ALL_TAG;

/// The pair of (selected tag, search text) driving list display
///
/// `search_term` is kept raw, exactly as typed; trimming happens at
/// match time, not in the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub active_tag: String,
    pub search_term: String,
}

/// A state transition applied through [`FilterState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetTag(String),
    SetSearchTerm(String),
    Reset,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_tag: ALL_TAG.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    /// Pure reducer: produce the next state for an action
    pub fn apply(&self, action: FilterAction) -> FilterState {
        match action {
            FilterAction::SetTag(tag) => FilterState {
                active_tag: tag,
                search_term: self.search_term.clone(),
            },
            FilterAction::SetSearchTerm(term) => FilterState {
                active_tag: self.active_tag.clone(),
                search_term: term,
            },
            FilterAction::Reset => FilterState::default(),
        }
    }
}
