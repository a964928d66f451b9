//! # folio-api
//!
//! A typed REST content API serving two resource kinds — blog posts and
//! projects — as thin, generic controllers over a pluggable entity store.
//!
//! ## Features
//!
//! - **Generic resource service**: one [`core::ResourceService`] per kind
//!   composes parameter validation, store queries and response shaping
//! - **Storage-agnostic**: any [`core::EntityStore`] implementation is
//!   substitutable; an in-memory store ships for tests and development
//! - **Uniform envelopes**: `{ data }` for single records, `{ data,
//!   meta.pagination }` for listings, `ceil(total / pageSize)` page counts
//! - **Typed validation**: required-field and URL-format rules run before
//!   any store write
//! - **Auth gate**: read routes are public, write routes sit behind an
//!   injected [`server::AuthProvider`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     folio::server::init_tracing();
//!     ServerBuilder::new()
//!         .with_config(ServiceConfig::default())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Collection, Document, EntityStore, Filter, ListQuery, Page, PageLimits,
        Pagination, Resource, ResourceService, Sanitizer, Sort, StoreError, ValidationError,
    };
    pub use crate::core::sanitize::{FieldStrip, Passthrough};

    // === Resources ===
    pub use crate::resources::{
        BlogPost, BlogPostDraft, BlogPostPatch, Project, ProjectDraft, ProjectPatch,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{AuthProvider, BearerToken, NoAuth, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
