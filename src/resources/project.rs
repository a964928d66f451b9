//! Project resource
//!
//! Required at create: title, description, category, liveUrl. The liveUrl
//! must match `^https?://.+` at create and, when supplied, at update.
//! `featured` defaults to false and backs the filtered listing.

use crate::core::entity::Resource;
use crate::core::query::SortValue;
use crate::core::validation::{is_url, missing_fields, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub live_url: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload; required fields are checked by [`Resource::validate_create`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

/// Update payload; absent fields keep their previous values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

impl Resource for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn kind() -> &'static str {
        "project"
    }

    fn kind_plural() -> &'static str {
        "projects"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn sort_field() -> &'static str {
        "createdAt"
    }

    fn validate_create(draft: &Self::Draft) -> Result<(), ValidationError> {
        let missing = missing_fields(&[
            ("title", present(&draft.title)),
            ("description", present(&draft.description)),
            ("category", present(&draft.category)),
            ("liveUrl", present(&draft.live_url)),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }
        match draft.live_url.as_deref() {
            Some(url) if is_url(url) => Ok(()),
            _ => Err(ValidationError::MalformedUrl { field: "liveUrl" }),
        }
    }

    fn validate_update(patch: &Self::Patch) -> Result<(), ValidationError> {
        // Absent liveUrl stays unchanged, so only re-check a supplied one
        if let Some(url) = patch.live_url.as_deref() {
            if !is_url(url) {
                return Err(ValidationError::MalformedUrl { field: "liveUrl" });
            }
        }
        Ok(())
    }

    fn from_draft(id: u64, draft: Self::Draft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            live_url: draft.live_url.unwrap_or_default(),
            featured: draft.featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = live_url;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now();
    }

    fn matches(&self, field: &str, value: &str) -> bool {
        match field {
            "title" => self.title == value,
            "description" => self.description == value,
            "category" => self.category == value,
            "liveUrl" => self.live_url == value,
            // Bare `?featured` carries an empty value and means true
            "featured" => self.featured == (value.is_empty() || value == "true"),
            _ => false,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "id" => Some(SortValue::Int(self.id)),
            "title" => Some(SortValue::Text(self.title.clone())),
            "category" => Some(SortValue::Text(self.category.clone())),
            "featured" => Some(SortValue::Flag(self.featured)),
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "updatedAt" => Some(SortValue::Time(self.updated_at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProjectDraft {
        ProjectDraft {
            title: Some("Portfolio".to_string()),
            description: Some("Personal site".to_string()),
            category: Some("web".to_string()),
            live_url: Some("https://example.com".to_string()),
            featured: None,
        }
    }

    #[test]
    fn test_validate_create_accepts_full_draft() {
        assert!(Project::validate_create(&full_draft()).is_ok());
    }

    #[test]
    fn test_validate_create_lists_missing_fields() {
        let err = Project::validate_create(&ProjectDraft::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["title", "description", "category", "liveUrl"]
            }
        );
    }

    #[test]
    fn test_validate_create_rejects_malformed_url() {
        let mut draft = full_draft();
        draft.live_url = Some("example.com".to_string());
        let err = Project::validate_create(&draft).unwrap_err();
        assert_eq!(err, ValidationError::MalformedUrl { field: "liveUrl" });
    }

    #[test]
    fn test_missing_fields_reported_before_url_format() {
        let mut draft = full_draft();
        draft.title = None;
        draft.live_url = Some("not-a-url".to_string());
        let err = Project::validate_create(&draft).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields { fields: vec!["title"] }
        );
    }

    #[test]
    fn test_validate_update_ignores_absent_url() {
        assert!(Project::validate_update(&ProjectPatch::default()).is_ok());
    }

    #[test]
    fn test_validate_update_rejects_supplied_malformed_url() {
        let patch = ProjectPatch {
            live_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        let err = Project::validate_update(&patch).unwrap_err();
        assert_eq!(err, ValidationError::MalformedUrl { field: "liveUrl" });
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let project = Project::from_draft(1, full_draft());
        assert!(!project.featured);
    }

    #[test]
    fn test_matches_featured_accepts_bare_param() {
        let mut draft = full_draft();
        draft.featured = Some(true);
        let project = Project::from_draft(1, draft);
        assert!(project.matches("featured", ""));
        assert!(project.matches("featured", "true"));
        assert!(!project.matches("featured", "false"));
    }

    #[test]
    fn test_matches_category_equality() {
        let project = Project::from_draft(1, full_draft());
        assert!(project.matches("category", "web"));
        assert!(!project.matches("category", "mobile"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let project = Project::from_draft(1, full_draft());
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("liveUrl").is_some());
        assert!(value.get("live_url").is_none());
    }
}
