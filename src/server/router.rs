//! Route wiring for the REST surface
//!
//! Per kind: two public read routes and three write routes behind the
//! auth gate. The routing table mirrors the original content API, plus
//! the health-check endpoints.

use crate::core::entity::Resource;
use crate::server::handlers::{self, ResourceState};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Build the CRUD routes for one resource kind mounted at `/{path}`
pub fn resource_routes<R: Resource>(path: &str, state: ResourceState<R>) -> Router {
    let collection = format!("/{}", path);
    let item = format!("/{}/{{id}}", path);

    Router::new()
        .route(
            &collection,
            get(handlers::list::<R>).post(handlers::create::<R>),
        )
        .route(
            &item,
            get(handlers::get_one::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::delete::<R>),
        )
        .with_state(state)
}

/// Build the project-only featured listing route
pub fn featured_route(state: ResourceState<crate::resources::Project>) -> Router {
    Router::new()
        .route("/projects/featured", get(handlers::list_featured))
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "folio-api"
    }))
}
