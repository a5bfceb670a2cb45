//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Compute derived relation queries on demand, without caching.

pub mod catalog_service;
