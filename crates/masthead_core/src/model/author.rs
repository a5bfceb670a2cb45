//! Author domain model.
//!
//! # Responsibility
//! - Define the canonical author record and its naming contract.
//! - Provide explicit validation for author input.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another author.
//! - `name` is set once at construction and can never be reassigned.
//! - `article_ids` is append-only, populated only by article creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::article::ArticleId;

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// Validation failures for author input and mutation attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorValidationError {
    /// Caller-provided identifier is the nil uuid.
    NilUuid,
    /// Name is empty.
    EmptyName,
    /// Name reassignment was attempted after construction.
    ImmutableName,
}

impl Display for AuthorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "author id must not be the nil uuid"),
            Self::EmptyName => write!(f, "author name must not be empty"),
            Self::ImmutableName => write!(f, "author name is immutable"),
        }
    }
}

impl Error for AuthorValidationError {}

/// Validates author name input according to the construction contract.
pub fn validate_author_name(name: &str) -> Result<(), AuthorValidationError> {
    if name.is_empty() {
        return Err(AuthorValidationError::EmptyName);
    }
    Ok(())
}

/// Canonical author record.
///
/// Articles are referenced by identifier; the record never owns article
/// data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAuthor")]
pub struct Author {
    uuid: AuthorId,
    name: String,
    /// Serialized as `articles` to match the external schema naming.
    #[serde(rename = "articles")]
    article_ids: Vec<ArticleId>,
}

impl Author {
    /// Creates a new author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Result<Self, AuthorValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a new author with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: AuthorId,
        name: impl Into<String>,
    ) -> Result<Self, AuthorValidationError> {
        let author = Self {
            uuid,
            name: name.into(),
            article_ids: Vec::new(),
        };
        author.validate()?;
        Ok(author)
    }

    /// Re-checks construction invariants.
    pub fn validate(&self) -> Result<(), AuthorValidationError> {
        if self.uuid.is_nil() {
            return Err(AuthorValidationError::NilUuid);
        }
        validate_author_name(&self.name)
    }

    /// Returns the stable author ID.
    pub fn uuid(&self) -> AuthorId {
        self.uuid
    }

    /// Returns the author's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: the name is fixed at construction.
    ///
    /// The method exists so that the immutability contract is an
    /// observable, testable error rather than a silent omission.
    pub fn set_name(
        &mut self,
        _name: impl Into<String>,
    ) -> Result<(), AuthorValidationError> {
        Err(AuthorValidationError::ImmutableName)
    }

    /// Returns the articles linked at creation time, in creation order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.article_ids
    }

    /// Appends one article link. Called by the catalog only.
    pub(crate) fn link_article(&mut self, article_id: ArticleId) {
        self.article_ids.push(article_id);
    }
}

/// Raw wire mirror used to validate deserialized author data.
#[derive(Deserialize)]
struct RawAuthor {
    uuid: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl TryFrom<RawAuthor> for Author {
    type Error = AuthorValidationError;

    fn try_from(raw: RawAuthor) -> Result<Self, Self::Error> {
        let mut author = Author::with_id(raw.uuid, raw.name)?;
        author.article_ids = raw.articles;
        Ok(author)
    }
}
