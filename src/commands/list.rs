//! List catalog content

use anyhow::Result;

use crate::filter::tag_counts;
use crate::helpers::{format_date, truncate};
use crate::Folio;

/// List catalog content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let catalog = folio.load_catalog()?;
    let summary_length = folio.config.summary_length;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", catalog.posts.len());
            for post in &catalog.posts {
                println!(
                    "  [{}] {} - {}",
                    post.id,
                    format_date(&post.date),
                    post.title
                );
                if !post.summary.is_empty() {
                    println!("      {}", truncate(&post.summary, summary_length));
                }
            }
        }
        "project" | "projects" => {
            println!("Projects ({}):", catalog.projects.len());
            for project in &catalog.projects {
                let featured = if project.featured { " *" } else { "" };
                println!(
                    "  [{}] {}{} ({})",
                    project.id,
                    project.title,
                    featured,
                    project.technologies.join(", ")
                );
                if !project.description.is_empty() {
                    println!("      {}", truncate(&project.description, summary_length));
                }
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&catalog.posts);
            println!("Tags ({}):", tags.len());
            for (tag, count) in &tags {
                println!("  {} ({})", tag, count);
            }

            let technologies = tag_counts(&catalog.projects);
            println!("Technologies ({}):", technologies.len());
            for (tech, count) in &technologies {
                println!("  {} ({})", tech, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, tags",
                content_type
            );
        }
    }

    Ok(())
}
