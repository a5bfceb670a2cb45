//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/get/list/mutate APIs over the three entity kinds.
//! - Own the creation-ordered article registry and both link lists.
//!
//! # Invariants
//! - `create_*` paths call entity `validate()` before touching storage.
//! - A failed article creation leaves link lists and registry untouched.
//! - Link lists record creation-time relations only; reassignment updates
//!   the article's own fields and nothing else.
//! - Listings are deterministic: entities in id order, articles in
//!   creation order.

use crate::model::article::{Article, ArticleId, ArticleValidationError};
use crate::model::author::{Author, AuthorId, AuthorValidationError};
use crate::model::magazine::{Magazine, MagazineId, MagazineValidationError};
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog storage and query operations.
#[derive(Debug)]
pub enum RepoError {
    AuthorValidation(AuthorValidationError),
    MagazineValidation(MagazineValidationError),
    ArticleValidation(ArticleValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
    /// An entity with the same identifier is already registered.
    IdInUse(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthorValidation(err) => write!(f, "{err}"),
            Self::MagazineValidation(err) => write!(f, "{err}"),
            Self::ArticleValidation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::IdInUse(id) => write!(f, "identifier already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AuthorValidation(err) => Some(err),
            Self::MagazineValidation(err) => Some(err),
            Self::ArticleValidation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AuthorValidationError> for RepoError {
    fn from(value: AuthorValidationError) -> Self {
        Self::AuthorValidation(value)
    }
}

impl From<MagazineValidationError> for RepoError {
    fn from(value: MagazineValidationError) -> Self {
        Self::MagazineValidation(value)
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::ArticleValidation(value)
    }
}

/// Query options for scanning the article registry.
///
/// Filters apply to the article's *current* field values, so a reassigned
/// article shows up under its new author/magazine here even though link
/// lists still record the creation-time relation.
#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    /// Filter by current author assignment.
    pub author: Option<AuthorId>,
    /// Filter by current magazine assignment.
    pub magazine: Option<MagazineId>,
    /// Case-insensitive title substring filter. A blank needle matches
    /// every title.
    pub title_contains: Option<String>,
    /// Maximum rows to return. `None` returns the full match set.
    pub limit: Option<u32>,
    /// Number of matching rows to skip.
    pub offset: u32,
}

/// Repository interface for catalog operations.
pub trait CatalogRepository {
    /// Registers one author and returns its stable id.
    fn create_author(&mut self, author: &Author) -> RepoResult<AuthorId>;
    /// Registers one magazine and returns its stable id.
    fn create_magazine(&mut self, magazine: &Magazine) -> RepoResult<MagazineId>;
    /// Registers one article, linking it to its author, its magazine and
    /// the creation-ordered registry.
    fn create_article(&mut self, article: &Article) -> RepoResult<ArticleId>;

    /// Gets one author by id.
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Gets one magazine by id.
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    /// Gets one article by id.
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;

    /// Lists authors in id order.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    /// Lists magazines in id order.
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    /// Scans the registry in creation order using filter and pagination
    /// options.
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>>;

    /// Returns the author's creation-linked articles, in creation order.
    fn articles_by_author(&self, id: AuthorId) -> RepoResult<Vec<Article>>;
    /// Returns the magazine's creation-linked articles, in creation order.
    fn articles_in_magazine(&self, id: MagazineId) -> RepoResult<Vec<Article>>;

    /// Renames one magazine. Name length is not re-checked after
    /// construction.
    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> RepoResult<()>;
    /// Reassigns one magazine's category, re-validated on every call.
    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> RepoResult<()>;
    /// Retitles one article. Title length is not re-checked after
    /// construction.
    fn retitle_article(&mut self, id: ArticleId, title: &str) -> RepoResult<()>;
    /// Points one article at another registered author. Link lists keep
    /// their creation-time contents.
    fn reassign_article_author(&mut self, id: ArticleId, author_id: AuthorId)
        -> RepoResult<()>;
    /// Points one article at another registered magazine. Link lists keep
    /// their creation-time contents.
    fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()>;

    /// Removes every registered entity.
    fn clear(&mut self);
    /// Number of registered authors.
    fn author_count(&self) -> usize;
    /// Number of registered magazines.
    fn magazine_count(&self) -> usize;
    /// Number of articles in the registry.
    fn article_count(&self) -> usize;
}

/// In-memory catalog storage.
///
/// Owned and passed explicitly by the calling application; there is no
/// process-wide registry state.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    authors: BTreeMap<AuthorId, Author>,
    magazines: BTreeMap<MagazineId, Magazine>,
    /// Creation-ordered, append-only article registry.
    articles: Vec<Article>,
    article_slots: HashMap<ArticleId, usize>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for MemoryCatalog {
    fn create_author(&mut self, author: &Author) -> RepoResult<AuthorId> {
        author.validate()?;
        if self.authors.contains_key(&author.uuid()) {
            return Err(RepoError::IdInUse(author.uuid()));
        }
        self.authors.insert(author.uuid(), author.clone());
        Ok(author.uuid())
    }

    fn create_magazine(&mut self, magazine: &Magazine) -> RepoResult<MagazineId> {
        magazine.validate()?;
        if self.magazines.contains_key(&magazine.uuid()) {
            return Err(RepoError::IdInUse(magazine.uuid()));
        }
        self.magazines.insert(magazine.uuid(), magazine.clone());
        Ok(magazine.uuid())
    }

    fn create_article(&mut self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;
        if self.article_slots.contains_key(&article.uuid()) {
            return Err(RepoError::IdInUse(article.uuid()));
        }
        if !self.authors.contains_key(&article.author_id()) {
            return Err(RepoError::AuthorNotFound(article.author_id()));
        }
        if !self.magazines.contains_key(&article.magazine_id()) {
            return Err(RepoError::MagazineNotFound(article.magazine_id()));
        }

        // Every check passed; from here the registry and both link lists
        // are updated together.
        let slot = self.articles.len();
        self.articles.push(article.clone());
        self.article_slots.insert(article.uuid(), slot);
        if let Some(author) = self.authors.get_mut(&article.author_id()) {
            author.link_article(article.uuid());
        }
        if let Some(magazine) = self.magazines.get_mut(&article.magazine_id()) {
            magazine.link_article(article.uuid());
        }

        Ok(article.uuid())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.authors.get(&id).cloned())
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        Ok(self.magazines.get(&id).cloned())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        Ok(self
            .article_slots
            .get(&id)
            .and_then(|slot| self.articles.get(*slot))
            .cloned())
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        Ok(self.authors.values().cloned().collect())
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        Ok(self.magazines.values().cloned().collect())
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>> {
        let needle = query.title_contains.as_deref().map(str::to_lowercase);
        let matches = self.articles.iter().filter(|article| {
            query.author.is_none_or(|id| article.author_id() == id)
                && query.magazine.is_none_or(|id| article.magazine_id() == id)
                && needle
                    .as_deref()
                    .is_none_or(|needle| title_matches(needle, article.title()))
        });

        let offset = query.offset as usize;
        let articles = match query.limit {
            Some(limit) => matches
                .skip(offset)
                .take(limit as usize)
                .cloned()
                .collect(),
            None => matches.skip(offset).cloned().collect(),
        };

        Ok(articles)
    }

    fn articles_by_author(&self, id: AuthorId) -> RepoResult<Vec<Article>> {
        let author = self
            .authors
            .get(&id)
            .ok_or(RepoError::AuthorNotFound(id))?;
        self.resolve_links(author.article_ids())
    }

    fn articles_in_magazine(&self, id: MagazineId) -> RepoResult<Vec<Article>> {
        let magazine = self
            .magazines
            .get(&id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        self.resolve_links(magazine.article_ids())
    }

    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> RepoResult<()> {
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_name(name);
        Ok(())
    }

    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> RepoResult<()> {
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_category(category)?;
        Ok(())
    }

    fn retitle_article(&mut self, id: ArticleId, title: &str) -> RepoResult<()> {
        let article = self.article_mut(id)?;
        article.set_title(title);
        Ok(())
    }

    fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author_id: AuthorId,
    ) -> RepoResult<()> {
        if !self.authors.contains_key(&author_id) {
            return Err(RepoError::AuthorNotFound(author_id));
        }
        let article = self.article_mut(id)?;
        article.set_author_id(author_id);
        Ok(())
    }

    fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()> {
        if !self.magazines.contains_key(&magazine_id) {
            return Err(RepoError::MagazineNotFound(magazine_id));
        }
        let article = self.article_mut(id)?;
        article.set_magazine_id(magazine_id);
        Ok(())
    }

    fn clear(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
        self.article_slots.clear();
    }

    fn author_count(&self) -> usize {
        self.authors.len()
    }

    fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    fn article_count(&self) -> usize {
        self.articles.len()
    }
}

impl MemoryCatalog {
    fn article_mut(&mut self, id: ArticleId) -> RepoResult<&mut Article> {
        let slot = *self
            .article_slots
            .get(&id)
            .ok_or(RepoError::ArticleNotFound(id))?;
        self.articles
            .get_mut(slot)
            .ok_or(RepoError::ArticleNotFound(id))
    }

    /// Resolves link-list ids against the registry.
    ///
    /// Links are only appended by `create_article`, so a dangling id is
    /// invalid storage state and is rejected instead of masked.
    fn resolve_links(&self, ids: &[ArticleId]) -> RepoResult<Vec<Article>> {
        let mut articles = Vec::with_capacity(ids.len());
        for id in ids {
            let article = self
                .article_slots
                .get(id)
                .and_then(|slot| self.articles.get(*slot))
                .ok_or(RepoError::ArticleNotFound(*id))?;
            articles.push(article.clone());
        }
        Ok(articles)
    }
}

/// Case-insensitive title match. The needle must already be lowercased.
fn title_matches(needle: &str, title: &str) -> bool {
    title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::title_matches;

    #[test]
    fn title_match_is_case_insensitive() {
        assert!(title_matches("rust", "Practical Rust Patterns"));
        assert!(!title_matches("go", "Practical Rust Patterns"));
    }

    #[test]
    fn blank_needle_matches_everything() {
        assert!(title_matches("", "Anything at all"));
    }
}
