//! HTTP handlers for resource operations
//!
//! Every handler is generic over the resource kind; the only
//! kind-specific handler is the featured-projects listing. The two read
//! handlers are public; the three write handlers check the auth provider
//! before touching the service.

use crate::core::entity::Resource;
use crate::core::error::ApiError;
use crate::core::query::{Collection, Document};
use crate::core::service::ResourceService;
use crate::resources::project::Project;
use crate::server::auth::AuthProvider;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Per-kind state shared across handlers
pub struct ResourceState<R: Resource> {
    pub service: Arc<ResourceService<R>>,
    pub auth: Arc<dyn AuthProvider>,
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            auth: self.auth.clone(),
        }
    }
}

/// GET /{kind} — paginated listing with filters and sorting
pub async fn list<R: Resource>(
    State(state): State<ResourceState<R>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Collection<Value>>, ApiError> {
    state.service.list(&params).await.map(Json)
}

/// GET /{kind}/{id} — single-record fetch
pub async fn get_one<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<u64>,
) -> Result<Json<Document<Value>>, ApiError> {
    state.service.get_one(id).await.map(Json)
}

/// POST /{kind} — validated create; body is `{ data: { ...fields } }`
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    headers: HeaderMap,
    Json(body): Json<Document<R::Draft>>,
) -> Result<Json<Document<Value>>, ApiError> {
    state.auth.authorize(&headers)?;
    state.service.create(body.data).await.map(Json)
}

/// PUT /{kind}/{id} — partial update
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Document<R::Patch>>,
) -> Result<Json<Document<Value>>, ApiError> {
    state.auth.authorize(&headers)?;
    state.service.update(id, body.data).await.map(Json)
}

/// DELETE /{kind}/{id} — delete, returning the pre-deletion record
pub async fn delete<R: Resource>(
    State(state): State<ResourceState<R>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Document<Value>>, ApiError> {
    state.auth.authorize(&headers)?;
    state.service.delete(id).await.map(Json)
}

/// GET /projects/featured — fixed-filter listing without pagination meta
pub async fn list_featured(
    State(state): State<ResourceState<Project>>,
) -> Result<Json<Document<Vec<Value>>>, ApiError> {
    state.service.find_filtered("featured", "true").await.map(Json)
}
