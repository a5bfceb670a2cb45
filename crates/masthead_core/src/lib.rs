//! Core domain logic for Masthead, a validated in-memory publishing
//! catalog of authors, magazines and the articles binding them.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    Article, ArticleId, ArticleValidationError, ARTICLE_TITLE_MAX_CHARS, ARTICLE_TITLE_MIN_CHARS,
};
pub use model::author::{Author, AuthorId, AuthorValidationError};
pub use model::magazine::{
    Magazine, MagazineId, MagazineValidationError, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
pub use repo::catalog_repo::{
    ArticleListQuery, CatalogRepository, MemoryCatalog, RepoError, RepoResult,
};
pub use service::catalog_service::{
    CatalogService, CatalogServiceError, CONTRIBUTING_AUTHOR_THRESHOLD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
