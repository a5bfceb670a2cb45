//! Article domain model.
//!
//! # Responsibility
//! - Define the join record binding one author to one magazine.
//! - Provide explicit validation for article titles.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another article.
//! - `title` length is enforced only at construction; later retitles
//!   accept any string.
//! - `author_id`/`magazine_id` reassignment goes through the catalog,
//!   which checks the target is registered but does not re-link either
//!   side's article lists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;

/// Minimum article title length in characters, enforced at construction.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length in characters, enforced at construction.
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// Validation failures for article input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// Caller-provided identifier is the nil uuid.
    NilUuid,
    /// Title length is outside the construction bounds.
    TitleLength { length: usize },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "article id must not be the nil uuid"),
            Self::TitleLength { length } => write!(
                f,
                "article title must be {ARTICLE_TITLE_MIN_CHARS}..={ARTICLE_TITLE_MAX_CHARS} characters, got {length}"
            ),
        }
    }
}

impl Error for ArticleValidationError {}

/// Validates article title input according to the construction contract.
///
/// Length counts Unicode scalar values, not bytes.
pub fn validate_article_title(title: &str) -> Result<(), ArticleValidationError> {
    let length = title.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&length) {
        return Err(ArticleValidationError::TitleLength { length });
    }
    Ok(())
}

/// Join record binding one author to one magazine.
///
/// Relations are identifier-based; resolving them requires the catalog
/// the article was registered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArticle")]
pub struct Article {
    uuid: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl Article {
    /// Creates a new article with a generated stable ID.
    ///
    /// Validates the title only; whether `author_id` and `magazine_id`
    /// resolve to registered entities is checked when the article is
    /// added to a catalog.
    pub fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        Self::with_id(Uuid::new_v4(), author_id, magazine_id, title)
    }

    /// Creates a new article with a caller-provided stable ID.
    pub fn with_id(
        uuid: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        let article = Self {
            uuid,
            author_id,
            magazine_id,
            title: title.into(),
        };
        article.validate()?;
        Ok(article)
    }

    /// Re-checks construction invariants.
    ///
    /// Called on catalog create paths; a retitled article is not
    /// re-validated against the title bounds.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.uuid.is_nil() {
            return Err(ArticleValidationError::NilUuid);
        }
        validate_article_title(&self.title)
    }

    /// Returns the stable article ID.
    pub fn uuid(&self) -> ArticleId {
        self.uuid
    }

    /// Returns the current author assignment.
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// Returns the current magazine assignment.
    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Returns the article title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Retitles the article.
    ///
    /// The 5..=50 character bound applies at construction only; retitles
    /// accept any string.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Reassigns the author reference. Called by the catalog only, after
    /// it has checked the target author is registered.
    pub(crate) fn set_author_id(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    /// Reassigns the magazine reference. Called by the catalog only, after
    /// it has checked the target magazine is registered.
    pub(crate) fn set_magazine_id(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}

/// Raw wire mirror used to validate deserialized article data.
#[derive(Deserialize)]
struct RawArticle {
    uuid: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<RawArticle> for Article {
    type Error = ArticleValidationError;

    fn try_from(raw: RawArticle) -> Result<Self, Self::Error> {
        Article::with_id(raw.uuid, raw.author_id, raw.magazine_id, raw.title)
    }
}
