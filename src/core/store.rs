//! Entity store trait: the persistence seam
//!
//! The service is agnostic to the storage engine. Anything implementing
//! [`EntityStore`] — relational, document, in-memory — is substitutable
//! without touching the service layer.

use crate::core::entity::Resource;
use crate::core::error::StoreError;
use crate::core::query::{Filter, ListQuery};
use async_trait::async_trait;

/// CRUD and count/find operations over records of one kind
///
/// The store owns identifier assignment, filtering, sorting, the page
/// window, and the partial-merge semantics of `update`. Each call is
/// expected to be atomic per record; this layer adds no transactions,
/// retries or timeouts on top.
#[async_trait]
pub trait EntityStore<R: Resource>: Send + Sync {
    /// Fetch records matching the query's filters, ordered by its sort,
    /// windowed by its page (if any)
    async fn find_many(&self, query: &ListQuery) -> Result<Vec<R>, StoreError>;

    /// Count records matching the filters (sort and pagination excluded)
    async fn count(&self, filter: &Filter) -> Result<u64, StoreError>;

    /// Look up one record by id
    async fn find_one(&self, id: u64) -> Result<Option<R>, StoreError>;

    /// Persist a new record from a validated draft
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Merge a patch into the record with this id; `None` if absent
    async fn update(&self, id: u64, patch: R::Patch) -> Result<Option<R>, StoreError>;

    /// Remove the record with this id, returning its pre-deletion state;
    /// `None` if absent
    async fn delete(&self, id: u64) -> Result<Option<R>, StoreError>;
}
