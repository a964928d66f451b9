//! ServerBuilder for fluent API to build the HTTP server
//!
//! Wires the two resource kinds onto an axum router with their stores,
//! the sanitizer, and the write-route auth gate.
//!
//! # Example
//!
//! ```ignore
//! let app = ServerBuilder::new()
//!     .with_config(ServiceConfig::from_yaml_file("folio.yaml")?)
//!     .build()?;
//! ```

use crate::config::ServiceConfig;
use crate::core::query::PageLimits;
use crate::core::sanitize::{Passthrough, Sanitizer};
use crate::core::service::ResourceService;
use crate::core::store::EntityStore;
use crate::resources::{BlogPost, Project};
use crate::server::auth::{AuthProvider, BearerToken, NoAuth};
use crate::server::handlers::ResourceState;
use crate::server::router::{featured_route, health_routes, resource_routes};
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the folio HTTP server
pub struct ServerBuilder {
    config: ServiceConfig,
    sanitizer: Arc<dyn Sanitizer>,
    auth: Option<Arc<dyn AuthProvider>>,
    blog_store: Option<Arc<dyn EntityStore<BlogPost>>>,
    project_store: Option<Arc<dyn EntityStore<Project>>>,
}

impl ServerBuilder {
    /// Create a builder with default config, in-memory stores and a
    /// pass-through sanitizer
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
            sanitizer: Arc::new(Passthrough),
            auth: None,
            blog_store: None,
            project_store: None,
        }
    }

    /// Set the service configuration
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the output sanitizer applied to every record
    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Arc::new(sanitizer);
        self
    }

    /// Set the auth provider guarding write routes
    ///
    /// When not set, the builder uses a bearer-token provider if the
    /// config carries an `api_token`, and a permissive provider otherwise.
    pub fn with_auth_provider(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Set the entity store backing blog posts
    pub fn with_blog_store(mut self, store: impl EntityStore<BlogPost> + 'static) -> Self {
        self.blog_store = Some(Arc::new(store));
        self
    }

    /// Set the entity store backing projects
    pub fn with_project_store(mut self, store: impl EntityStore<Project> + 'static) -> Self {
        self.project_store = Some(Arc::new(store));
        self
    }

    /// Build the axum router
    pub fn build(self) -> Result<Router> {
        let limits = PageLimits {
            default_page_size: self.config.default_page_size,
            max_page_size: self.config.max_page_size,
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(auth) => auth,
            None => match &self.config.api_token {
                Some(token) => Arc::new(BearerToken::new(token.clone())),
                None => Arc::new(NoAuth),
            },
        };

        let blog_store = self
            .blog_store
            .unwrap_or_else(|| Arc::new(InMemoryStore::<BlogPost>::new()));
        let project_store = self
            .project_store
            .unwrap_or_else(|| Arc::new(InMemoryStore::<Project>::new()));

        let blog_state = ResourceState {
            service: Arc::new(ResourceService::new(
                blog_store,
                self.sanitizer.clone(),
                limits,
            )),
            auth: auth.clone(),
        };
        let project_state = ResourceState {
            service: Arc::new(ResourceService::new(
                project_store,
                self.sanitizer.clone(),
                limits,
            )),
            auth,
        };

        let app = health_routes()
            .merge(featured_route(project_state.clone()))
            .merge(resource_routes("blog-posts", blog_state))
            .merge(resource_routes("projects", project_state))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        Ok(app)
    }

    /// Build the router and serve it on the configured bind address
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr.clone();
        let app = self.build()?;

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "folio-api listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
