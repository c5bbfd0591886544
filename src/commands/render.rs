//! Render a post body to HTML

use anyhow::Result;

use crate::content::markdown;
use crate::Folio;

/// Render the markdown body of the post with the given id to stdout
pub fn run(folio: &Folio, id: &str) -> Result<()> {
    let catalog = folio.load_catalog()?;

    let Some(post) = catalog.posts.iter().find(|p| p.id.matches(id)) else {
        anyhow::bail!("No post with id: {}", id);
    };

    match &post.content {
        Some(content) => {
            tracing::debug!("Rendering post {} ({})", post.id, post.title);
            println!("{}", markdown::render_html(content));
        }
        None => {
            anyhow::bail!("Post {} has no body", post.id);
        }
    }

    Ok(())
}
