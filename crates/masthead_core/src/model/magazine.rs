//! Magazine domain model.
//!
//! # Responsibility
//! - Define the canonical magazine record with name/category contracts.
//! - Provide explicit validation for magazine input.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another magazine.
//! - `name` length is enforced only at construction; later renames accept
//!   any string.
//! - `category` must be non-empty on every assignment; a failed assignment
//!   leaves the prior value intact.
//! - `article_ids` is append-only, populated only by article creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::model::article::ArticleId;

/// Minimum magazine name length in characters, enforced at construction.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length in characters, enforced at construction.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Validation failures for magazine input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagazineValidationError {
    /// Caller-provided identifier is the nil uuid.
    NilUuid,
    /// Name length is outside the construction bounds.
    NameLength { length: usize },
    /// Category is empty.
    EmptyCategory,
}

impl Display for MagazineValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "magazine id must not be the nil uuid"),
            Self::NameLength { length } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}..={MAGAZINE_NAME_MAX_CHARS} characters, got {length}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
        }
    }
}

impl Error for MagazineValidationError {}

/// Validates magazine name input according to the construction contract.
///
/// Length counts Unicode scalar values, not bytes.
pub fn validate_magazine_name(name: &str) -> Result<(), MagazineValidationError> {
    let length = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&length) {
        return Err(MagazineValidationError::NameLength { length });
    }
    Ok(())
}

/// Validates category input. Applies to construction and every reassignment.
pub fn validate_category(category: &str) -> Result<(), MagazineValidationError> {
    if category.is_empty() {
        return Err(MagazineValidationError::EmptyCategory);
    }
    Ok(())
}

/// Canonical magazine record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMagazine")]
pub struct Magazine {
    uuid: MagazineId,
    name: String,
    category: String,
    /// Serialized as `articles` to match the external schema naming.
    #[serde(rename = "articles")]
    article_ids: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a new magazine with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, MagazineValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a new magazine with a caller-provided stable ID.
    pub fn with_id(
        uuid: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, MagazineValidationError> {
        let magazine = Self {
            uuid,
            name: name.into(),
            category: category.into(),
            article_ids: Vec::new(),
        };
        magazine.validate()?;
        Ok(magazine)
    }

    /// Re-checks construction invariants.
    ///
    /// Called on catalog create paths; a magazine renamed after
    /// registration is not re-validated against the name bounds.
    pub fn validate(&self) -> Result<(), MagazineValidationError> {
        if self.uuid.is_nil() {
            return Err(MagazineValidationError::NilUuid);
        }
        validate_magazine_name(&self.name)?;
        validate_category(&self.category)
    }

    /// Returns the stable magazine ID.
    pub fn uuid(&self) -> MagazineId {
        self.uuid
    }

    /// Returns the magazine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the magazine.
    ///
    /// The 2..=16 character bound applies at construction only; renames
    /// accept any string.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the magazine's category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Reassigns the category, re-validated on every assignment.
    ///
    /// On failure the prior category is left intact.
    pub fn set_category(
        &mut self,
        category: impl Into<String>,
    ) -> Result<(), MagazineValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
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

/// Raw wire mirror used to validate deserialized magazine data.
#[derive(Deserialize)]
struct RawMagazine {
    uuid: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl TryFrom<RawMagazine> for Magazine {
    type Error = MagazineValidationError;

    fn try_from(raw: RawMagazine) -> Result<Self, Self::Error> {
        let mut magazine = Magazine::with_id(raw.uuid, raw.name, raw.category)?;
        magazine.article_ids = raw.articles;
        Ok(magazine)
    }
}
