//! Minimal folio-api server over in-memory stores
//!
//! Run with: cargo run --example basic_server
//!
//! Then try:
//!   curl http://localhost:3000/blog-posts
//!   curl -X POST http://localhost:3000/blog-posts \
//!     -H 'Content-Type: application/json' \
//!     -d '{"data":{"title":"Hello","content":"First post","author":"Ada"}}'
//!   curl http://localhost:3000/projects/featured

use folio::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    folio::server::init_tracing();

    ServerBuilder::new()
        .with_config(ServiceConfig::default())
        .serve()
        .await
}
