//! Concrete resource kinds served by the API

pub mod blog_post;
pub mod project;

pub use blog_post::{BlogPost, BlogPostDraft, BlogPostPatch};
pub use project::{Project, ProjectDraft, ProjectPatch};
