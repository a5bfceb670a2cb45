//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `masthead_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use masthead_core::{CatalogService, MemoryCatalog};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("masthead_core version={}", masthead_core::core_version());

    let mut service = CatalogService::new(MemoryCatalog::new());
    let amy = service.register_author("Amy")?;
    let techzine = service.register_magazine("TechZine", "Tech")?;
    let artzine = service.register_magazine("ArtZine", "Art")?;

    service.publish_article(amy.uuid(), techzine.uuid(), "Rust for Editors")?;
    service.publish_article(amy.uuid(), techzine.uuid(), "Typesetting at Scale")?;
    service.publish_article(amy.uuid(), techzine.uuid(), "Deadline Engineering")?;
    service.publish_article(amy.uuid(), artzine.uuid(), "Cover Art Trends")?;

    let magazines = service.magazines_for_author(amy.uuid())?;
    let names: Vec<&str> = magazines.iter().map(|magazine| magazine.name()).collect();
    println!("magazines_for_author={}", names.join(","));

    match service.topic_areas(amy.uuid())? {
        Some(topics) => {
            let topics: Vec<String> = topics.into_iter().collect();
            println!("topic_areas={}", topics.join(","));
        }
        None => println!("topic_areas=none"),
    }

    match service.contributing_authors(techzine.uuid())? {
        Some(authors) => {
            let names: Vec<&str> = authors.iter().map(|author| author.name()).collect();
            println!("contributing_authors={}", names.join(","));
        }
        None => println!("contributing_authors=none"),
    }

    Ok(())
}
