//! Generic resource service: the paginated query-and-validation layer
//!
//! One [`ResourceService`] is instantiated per resource kind. Every
//! operation composes the same three steps: parse/validate input, issue
//! the store call(s), shape the result into a `{ data }` or
//! `{ data, meta.pagination }` envelope with each record sanitized on the
//! way out.
//!
//! The service is stateless between requests; the store is the only shared
//! mutable state and owns its own concurrency control.

use crate::core::entity::Resource;
use crate::core::error::{ApiError, StoreError};
use crate::core::query::{
    Collection, Document, Filter, ListQuery, Meta, PageLimits, PageParams, Pagination, Sort,
};
use crate::core::sanitize::Sanitizer;
use crate::core::store::EntityStore;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Per-kind controller core over an injected store and sanitizer
pub struct ResourceService<R: Resource> {
    store: Arc<dyn EntityStore<R>>,
    sanitizer: Arc<dyn Sanitizer>,
    limits: PageLimits,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(
        store: Arc<dyn EntityStore<R>>,
        sanitizer: Arc<dyn Sanitizer>,
        limits: PageLimits,
    ) -> Self {
        Self {
            store,
            sanitizer,
            limits,
        }
    }

    /// List records with filters, sorting and pagination
    ///
    /// Issues one fetch and one independent count against the store; the
    /// two reads are concurrent since neither depends on the other.
    pub async fn list(
        &self,
        query: &HashMap<String, String>,
    ) -> Result<Collection<Value>, ApiError> {
        let page = PageParams::from_query(query).resolve(&self.limits)?;
        let filter = Filter::from_query(query);
        let sort = Sort::from_query(query, R::sort_field());

        tracing::debug!(kind = R::kind(), page = page.page, page_size = page.page_size, "listing");

        let list_query = ListQuery {
            filter: filter.clone(),
            sort,
            page: Some(page),
        };
        let (records, total) =
            tokio::try_join!(self.store.find_many(&list_query), self.store.count(&filter))
                .map_err(|e| self.store_err("fetching", R::kind_plural(), e))?;

        let data = self.sanitize_all(records, "fetching", R::kind_plural())?;
        Ok(Collection {
            data,
            meta: Meta {
                pagination: Pagination::new(page, total),
            },
        })
    }

    /// List records matching one fixed filter, without pagination metadata
    ///
    /// The `findFeatured` specialization: default sort applies, the
    /// response carries only `{ data }`.
    pub async fn find_filtered(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Document<Vec<Value>>, ApiError> {
        let list_query = ListQuery {
            filter: Filter::fixed(field, value),
            sort: Sort::newest_first(R::sort_field()),
            page: None,
        };
        let records = self
            .store
            .find_many(&list_query)
            .await
            .map_err(|e| self.store_err("fetching", R::kind_plural(), e))?;

        let data = self.sanitize_all(records, "fetching", R::kind_plural())?;
        Ok(Document { data })
    }

    /// Fetch one record by id, or 404
    pub async fn get_one(&self, id: u64) -> Result<Document<Value>, ApiError> {
        let record = self
            .store
            .find_one(id)
            .await
            .map_err(|e| self.store_err("fetching", R::kind(), e))?
            .ok_or(ApiError::NotFound { kind: R::kind(), id })?;

        Ok(Document {
            data: self.sanitize_one(record, "fetching", R::kind())?,
        })
    }

    /// Validate and persist a new record
    ///
    /// Validation precedes the store call, so invalid input never writes.
    pub async fn create(&self, draft: R::Draft) -> Result<Document<Value>, ApiError> {
        R::validate_create(&draft)?;

        let record = self
            .store
            .create(draft)
            .await
            .map_err(|e| self.store_err("creating", R::kind(), e))?;

        tracing::info!(kind = R::kind(), id = record.id(), "created");
        Ok(Document {
            data: self.sanitize_one(record, "creating", R::kind())?,
        })
    }

    /// Update an existing record with partial-merge semantics
    ///
    /// The existence check deliberately precedes validation: an update to
    /// a nonexistent id reports 404 even when the payload is also invalid.
    pub async fn update(&self, id: u64, patch: R::Patch) -> Result<Document<Value>, ApiError> {
        self.store
            .find_one(id)
            .await
            .map_err(|e| self.store_err("updating", R::kind(), e))?
            .ok_or(ApiError::NotFound { kind: R::kind(), id })?;

        R::validate_update(&patch)?;

        let record = self
            .store
            .update(id, patch)
            .await
            .map_err(|e| self.store_err("updating", R::kind(), e))?
            .ok_or(ApiError::NotFound { kind: R::kind(), id })?;

        tracing::info!(kind = R::kind(), id, "updated");
        Ok(Document {
            data: self.sanitize_one(record, "updating", R::kind())?,
        })
    }

    /// Delete a record, returning its pre-deletion representation
    pub async fn delete(&self, id: u64) -> Result<Document<Value>, ApiError> {
        self.store
            .find_one(id)
            .await
            .map_err(|e| self.store_err("deleting", R::kind(), e))?
            .ok_or(ApiError::NotFound { kind: R::kind(), id })?;

        let record = self
            .store
            .delete(id)
            .await
            .map_err(|e| self.store_err("deleting", R::kind(), e))?
            .ok_or(ApiError::NotFound { kind: R::kind(), id })?;

        tracing::info!(kind = R::kind(), id, "deleted");
        Ok(Document {
            data: self.sanitize_one(record, "deleting", R::kind())?,
        })
    }

    fn store_err(&self, verb: &'static str, kind: &'static str, source: StoreError) -> ApiError {
        ApiError::Store { kind, verb, source }
    }

    fn sanitize_one(
        &self,
        record: R,
        verb: &'static str,
        kind: &'static str,
    ) -> Result<Value, ApiError> {
        let value = serde_json::to_value(&record).map_err(|e| {
            self.store_err(verb, kind, StoreError::Serialization(e.to_string()))
        })?;
        Ok(self.sanitizer.sanitize(value))
    }

    fn sanitize_all(
        &self,
        records: Vec<R>,
        verb: &'static str,
        kind: &'static str,
    ) -> Result<Vec<Value>, ApiError> {
        records
            .into_iter()
            .map(|record| self.sanitize_one(record, verb, kind))
            .collect()
    }
}
