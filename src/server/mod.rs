//! HTTP server: routes, handlers, auth gate and builder

pub mod auth;
pub mod builder;
pub mod handlers;
pub mod router;

pub use auth::{AuthProvider, BearerToken, NoAuth};
pub use builder::ServerBuilder;
pub use handlers::ResourceState;

/// Initialize tracing with an env-filter (`RUST_LOG`), defaulting to `info`
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
