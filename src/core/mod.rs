//! Core abstractions: the resource contract, the store seam, query and
//! pagination handling, validation, sanitization and error types

pub mod entity;
pub mod error;
pub mod query;
pub mod sanitize;
pub mod service;
pub mod store;
pub mod validation;

pub use entity::Resource;
pub use error::{ApiError, ErrorResponse, StoreError};
pub use query::{
    Collection, Document, Filter, ListQuery, Meta, Page, PageLimits, PageParams, Pagination, Sort,
    SortValue,
};
pub use sanitize::{FieldStrip, Passthrough, Sanitizer};
pub use service::ResourceService;
pub use store::EntityStore;
pub use validation::ValidationError;
