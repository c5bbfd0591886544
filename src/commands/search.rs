//! Search the catalog

use anyhow::Result;

use crate::content::ContentItem;
use crate::filter::{filter_items, FilterAction, FilterState};
use crate::helpers::truncate;
use crate::Folio;

/// Run the filter engine against posts or projects and print matches
pub fn run(folio: &Folio, term: &str, tag: Option<&str>, projects: bool) -> Result<()> {
    let catalog = folio.load_catalog()?;

    let mut state = FilterState::default().apply(FilterAction::SetSearchTerm(term.to_string()));
    if let Some(tag) = tag {
        state = state.apply(FilterAction::SetTag(tag.to_string()));
    }

    if projects {
        print_matches(&filter_items(&catalog.projects, &state), folio);
    } else {
        print_matches(&filter_items(&catalog.posts, &state), folio);
    }

    Ok(())
}

fn print_matches<T: ContentItem>(matches: &[&T], folio: &Folio) {
    println!("Matches ({}):", matches.len());
    for item in matches {
        println!(
            "  [{}] {} ({})",
            item.id(),
            item.title(),
            item.tags().join(", ")
        );
        if !item.summary().is_empty() {
            println!(
                "      {}",
                truncate(item.summary(), folio.config.summary_length)
            );
        }
    }
}
