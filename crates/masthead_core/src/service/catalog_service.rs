//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide register/publish entry points with read-back semantics.
//! - Compute derived queries (contributors, topic areas, qualifying
//!   authors, title listings) by scanning the relevant relation.
//!
//! # Invariants
//! - Derived queries iterate creation-linked articles and read their
//!   current field values; they never cache results.
//! - Service APIs never bypass repository validation contracts.
//! - "No data" results are `None`, never an empty collection.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{ArticleListQuery, CatalogRepository, RepoError};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authors qualify as contributing authors of a magazine with strictly
/// more than this many articles in it.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Errors from catalog service operations.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Target author does not exist.
    AuthorNotFound(AuthorId),
    /// Target magazine does not exist.
    MagazineNotFound(MagazineId),
    /// Target article does not exist.
    ArticleNotFound(ArticleId),
    /// Storage-layer failure (validation, id reuse).
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent catalog state: {details}")
            }
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CatalogServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AuthorNotFound(id) => Self::AuthorNotFound(id),
            RepoError::MagazineNotFound(id) => Self::MagazineNotFound(id),
            RepoError::ArticleNotFound(id) => Self::ArticleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Catalog service facade over repository implementations.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author by name.
    pub fn register_author(&mut self, name: &str) -> Result<Author, CatalogServiceError> {
        let author = Author::new(name).map_err(RepoError::from)?;
        let author_id = self.repo.create_author(&author)?;
        self.repo
            .get_author(author_id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "created author not found in read-back",
            ))
    }

    /// Registers a new magazine by name and category.
    pub fn register_magazine(
        &mut self,
        name: &str,
        category: &str,
    ) -> Result<Magazine, CatalogServiceError> {
        let magazine = Magazine::new(name, category).map_err(RepoError::from)?;
        let magazine_id = self.repo.create_magazine(&magazine)?;
        self.repo
            .get_magazine(magazine_id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "created magazine not found in read-back",
            ))
    }

    /// Publishes a new article by the given author in the given magazine.
    ///
    /// # Contract
    /// - Title is validated before anything is linked.
    /// - On success the article appears exactly once in the author's link
    ///   list, the magazine's link list and the registry.
    /// - On failure no collection gains an entry.
    pub fn publish_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: &str,
    ) -> Result<Article, CatalogServiceError> {
        let article = Article::new(author_id, magazine_id, title).map_err(RepoError::from)?;
        let article_id = self.repo.create_article(&article)?;
        self.repo
            .get_article(article_id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "created article not found in read-back",
            ))
    }

    /// Gets one author by id.
    pub fn get_author(&self, id: AuthorId) -> Result<Option<Author>, CatalogServiceError> {
        Ok(self.repo.get_author(id)?)
    }

    /// Gets one magazine by id.
    pub fn get_magazine(
        &self,
        id: MagazineId,
    ) -> Result<Option<Magazine>, CatalogServiceError> {
        Ok(self.repo.get_magazine(id)?)
    }

    /// Gets one article by id.
    pub fn get_article(
        &self,
        id: ArticleId,
    ) -> Result<Option<Article>, CatalogServiceError> {
        Ok(self.repo.get_article(id)?)
    }

    /// Lists authors in id order.
    pub fn list_authors(&self) -> Result<Vec<Author>, CatalogServiceError> {
        Ok(self.repo.list_authors()?)
    }

    /// Lists magazines in id order.
    pub fn list_magazines(&self) -> Result<Vec<Magazine>, CatalogServiceError> {
        Ok(self.repo.list_magazines()?)
    }

    /// Scans the article registry using filter and pagination options.
    pub fn list_articles(
        &self,
        query: &ArticleListQuery,
    ) -> Result<Vec<Article>, CatalogServiceError> {
        Ok(self.repo.list_articles(query)?)
    }

    /// Returns the distinct magazines the author has published in.
    ///
    /// Duplicate-free, in order of first appearance among the author's
    /// creation-linked articles.
    pub fn magazines_for_author(
        &self,
        author_id: AuthorId,
    ) -> Result<Vec<Magazine>, CatalogServiceError> {
        let articles = self.repo.articles_by_author(author_id)?;
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in &articles {
            if seen.insert(article.magazine_id()) {
                magazines.push(self.linked_magazine(article.magazine_id())?);
            }
        }
        Ok(magazines)
    }

    /// Returns the distinct categories across the author's magazines.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(
        &self,
        author_id: AuthorId,
    ) -> Result<Option<BTreeSet<String>>, CatalogServiceError> {
        let articles = self.repo.articles_by_author(author_id)?;
        if articles.is_empty() {
            return Ok(None);
        }

        let mut topics = BTreeSet::new();
        for article in &articles {
            let magazine = self.linked_magazine(article.magazine_id())?;
            topics.insert(magazine.category().to_string());
        }
        Ok(Some(topics))
    }

    /// Returns the distinct authors with an article in the magazine.
    ///
    /// Duplicate-free, in order of first appearance among the magazine's
    /// creation-linked articles.
    pub fn contributors(
        &self,
        magazine_id: MagazineId,
    ) -> Result<Vec<Author>, CatalogServiceError> {
        let articles = self.repo.articles_in_magazine(magazine_id)?;
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in &articles {
            if seen.insert(article.author_id()) {
                authors.push(self.linked_author(article.author_id())?);
            }
        }
        Ok(authors)
    }

    /// Returns the magazine's article titles in creation order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(
        &self,
        magazine_id: MagazineId,
    ) -> Result<Option<Vec<String>>, CatalogServiceError> {
        let articles = self.repo.articles_in_magazine(magazine_id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Returns the authors with strictly more than
    /// [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in the magazine, in
    /// order of first appearance among qualifiers.
    ///
    /// Returns `None` when no author qualifies.
    pub fn contributing_authors(
        &self,
        magazine_id: MagazineId,
    ) -> Result<Option<Vec<Author>>, CatalogServiceError> {
        let articles = self.repo.articles_in_magazine(magazine_id)?;

        // Counted in first-appearance order so the result order is the
        // insertion order of qualifying authors.
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in &articles {
            match counts
                .iter_mut()
                .find(|(author_id, _)| *author_id == article.author_id())
            {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author_id(), 1)),
            }
        }

        let mut qualifying = Vec::new();
        for (author_id, count) in counts {
            if count > CONTRIBUTING_AUTHOR_THRESHOLD {
                qualifying.push(self.linked_author(author_id)?);
            }
        }

        Ok(if qualifying.is_empty() {
            None
        } else {
            Some(qualifying)
        })
    }

    /// Renames one magazine and returns the updated record.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: &str,
    ) -> Result<Magazine, CatalogServiceError> {
        self.repo.rename_magazine(id, name)?;
        self.repo
            .get_magazine(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "renamed magazine not found in read-back",
            ))
    }

    /// Reassigns one magazine's category and returns the updated record.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: &str,
    ) -> Result<Magazine, CatalogServiceError> {
        self.repo.recategorize_magazine(id, category)?;
        self.repo
            .get_magazine(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "recategorized magazine not found in read-back",
            ))
    }

    /// Retitles one article and returns the updated record.
    pub fn retitle_article(
        &mut self,
        id: ArticleId,
        title: &str,
    ) -> Result<Article, CatalogServiceError> {
        self.repo.retitle_article(id, title)?;
        self.repo
            .get_article(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "retitled article not found in read-back",
            ))
    }

    /// Points one article at another registered author and returns the
    /// updated record. Link lists keep their creation-time contents.
    pub fn reassign_article_author(
        &mut self,
        id: ArticleId,
        author_id: AuthorId,
    ) -> Result<Article, CatalogServiceError> {
        self.repo.reassign_article_author(id, author_id)?;
        self.repo
            .get_article(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "reassigned article not found in read-back",
            ))
    }

    /// Points one article at another registered magazine and returns the
    /// updated record. Link lists keep their creation-time contents.
    pub fn reassign_article_magazine(
        &mut self,
        id: ArticleId,
        magazine_id: MagazineId,
    ) -> Result<Article, CatalogServiceError> {
        self.repo.reassign_article_magazine(id, magazine_id)?;
        self.repo
            .get_article(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "reassigned article not found in read-back",
            ))
    }

    /// Removes every registered entity.
    pub fn clear_catalog(&mut self) {
        self.repo.clear();
    }

    /// Number of articles in the registry.
    pub fn article_count(&self) -> usize {
        self.repo.article_count()
    }

    fn linked_author(&self, id: AuthorId) -> Result<Author, CatalogServiceError> {
        self.repo
            .get_author(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "linked author missing from catalog",
            ))
    }

    fn linked_magazine(&self, id: MagazineId) -> Result<Magazine, CatalogServiceError> {
        self.repo
            .get_magazine(id)?
            .ok_or(CatalogServiceError::InconsistentState(
                "linked magazine missing from catalog",
            ))
    }
}
