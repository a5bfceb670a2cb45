//! Publishing catalog domain model.
//!
//! # Responsibility
//! - Define the canonical author/magazine/article records.
//! - Provide explicit validation functions returning typed results.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid, never the nil uuid.
//! - Relations are expressed as identifier references, not object graphs.
//! - `article_ids` link lists are append-only and written only by the
//!   catalog during article creation.

pub mod article;
pub mod author;
pub mod magazine;
