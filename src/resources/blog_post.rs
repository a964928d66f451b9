//! Blog post resource
//!
//! Required at create: title, content, author. `publishedAt` defaults to
//! the creation time when absent. Tags are optional and filterable by
//! containment.

use crate::core::entity::Resource;
use crate::core::query::SortValue;
use crate::core::validation::{missing_fields, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload; required fields are checked by [`Resource::validate_create`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Update payload; absent fields keep their previous values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published_at: Option<DateTime<Utc>>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

impl Resource for BlogPost {
    type Draft = BlogPostDraft;
    type Patch = BlogPostPatch;

    fn kind() -> &'static str {
        "blog post"
    }

    fn kind_plural() -> &'static str {
        "blog posts"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn sort_field() -> &'static str {
        "publishedAt"
    }

    fn validate_create(draft: &Self::Draft) -> Result<(), ValidationError> {
        let missing = missing_fields(&[
            ("title", present(&draft.title)),
            ("content", present(&draft.content)),
            ("author", present(&draft.author)),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }
        Ok(())
    }

    fn validate_update(_patch: &Self::Patch) -> Result<(), ValidationError> {
        // Partial updates: no required-field re-check
        Ok(())
    }

    fn from_draft(id: u64, draft: Self::Draft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            published_at: draft.published_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(published_at) = patch.published_at {
            self.published_at = published_at;
        }
        self.updated_at = Utc::now();
    }

    fn matches(&self, field: &str, value: &str) -> bool {
        match field {
            "title" => self.title == value,
            "content" => self.content == value,
            "author" => self.author == value,
            "tag" | "tags" => self.tags.iter().any(|t| t == value),
            _ => false,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(SortValue::Int(self.id)),
            "title" => Some(SortValue::Text(self.title.clone())),
            "author" => Some(SortValue::Text(self.author.clone())),
            "publishedAt" => Some(SortValue::Time(self.published_at)),
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "updatedAt" => Some(SortValue::Time(self.updated_at)),
            _ => None,
        }
    }
}
