//! In-memory implementation of EntityStore for testing and development

use crate::core::entity::Resource;
use crate::core::error::StoreError;
use crate::core::query::{Filter, ListQuery, Sort};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock};

/// In-memory entity store
///
/// Ids are assigned sequentially starting at 1. Uses RwLock for
/// thread-safe access; per-record operations are atomic under the lock.
pub struct InMemoryStore<R: Resource> {
    records: Arc<RwLock<BTreeMap<u64, R>>>,
    next_id: AtomicU64,
}

impl<R: Resource> InMemoryStore<R> {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<R: Resource> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter<R: Resource>(record: &R, filter: &Filter) -> bool {
    filter
        .0
        .iter()
        .all(|(field, value)| record.matches(field, value))
}

fn apply_sort<R: Resource>(records: &mut [R], sort: &Sort) {
    records.sort_by(|a, b| {
        let ordering = match (a.sort_value(&sort.field), b.sort_value(&sort.field)) {
            (Some(va), Some(vb)) => va.partial_cmp(&vb).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        // Ties fall back to id so ordering is stable across calls
        let ordering = ordering.then(a.id().cmp(&b.id()));
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

#[async_trait]
impl<R: Resource> crate::core::store::EntityStore<R> for InMemoryStore<R> {
    async fn find_many(&self, query: &ListQuery) -> Result<Vec<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let mut matching: Vec<R> = records
            .values()
            .filter(|record| matches_filter(*record, &query.filter))
            .cloned()
            .collect();

        apply_sort(&mut matching, &query.sort);

        if let Some(page) = query.page {
            matching = matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.page_size as usize)
                .collect();
        }

        Ok(matching)
    }

    async fn count(&self, filter: &Filter) -> Result<u64, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records
            .values()
            .filter(|record| matches_filter(*record, filter))
            .count() as u64)
    }

    async fn find_one(&self, id: u64) -> Result<Option<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.get(&id).cloned())
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let record = R::from_draft(id, draft);
        records.insert(id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: u64, patch: R::Patch) -> Result<Option<R>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.get_mut(&id).map(|record| {
            record.apply_patch(patch);
            record.clone()
        }))
    }

    async fn delete(&self, id: u64) -> Result<Option<R>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        Ok(records.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Page;
    use crate::core::store::EntityStore;
    use crate::resources::blog_post::{BlogPost, BlogPostDraft, BlogPostPatch};

    fn draft(title: &str, tags: &[&str]) -> BlogPostDraft {
        BlogPostDraft {
            title: Some(title.to_string()),
            content: Some("content".to_string()),
            author: Some("Ada".to_string()),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            published_at: None,
        }
    }

    fn all(page: Option<Page>) -> ListQuery {
        ListQuery {
            filter: Filter::default(),
            sort: Sort::parse("id:asc"),
            page,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryStore::<BlogPost>::new();
        let first = store.create(draft("One", &[])).await.unwrap();
        let second = store.create(draft("Two", &[])).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_one_missing_returns_none() {
        let store = InMemoryStore::<BlogPost>::new();
        assert!(store.find_one(999999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = InMemoryStore::<BlogPost>::new();
        let created = store.create(draft("One", &["rust"])).await.unwrap();

        let updated = store
            .update(
                created.id,
                BlogPostPatch {
                    title: Some("One, revised".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "One, revised");
        assert_eq!(updated.content, "content");
        assert_eq!(updated.tags, vec!["rust".to_string()]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = InMemoryStore::<BlogPost>::new();
        let result = store
            .update(42, BlogPostPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_pre_deletion_record() {
        let store = InMemoryStore::<BlogPost>::new();
        let created = store.create(draft("Doomed", &[])).await.unwrap();

        let deleted = store.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted.title, "Doomed");
        assert!(store.find_one(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_many_filters_by_tag() {
        let store = InMemoryStore::<BlogPost>::new();
        store.create(draft("A", &["rust", "web"])).await.unwrap();
        store.create(draft("B", &["python"])).await.unwrap();

        let query = ListQuery {
            filter: Filter::fixed("tag", "rust"),
            sort: Sort::parse("id:asc"),
            page: None,
        };
        let matching = store.find_many(&query).await.unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "A");
    }

    #[tokio::test]
    async fn test_count_ignores_pagination() {
        let store = InMemoryStore::<BlogPost>::new();
        for i in 0..5 {
            store.create(draft(&format!("P{}", i), &[])).await.unwrap();
        }

        let page = Page { page: 1, page_size: 2 };
        let fetched = store.find_many(&all(Some(page))).await.unwrap();
        let total = store.count(&Filter::default()).await.unwrap();

        assert_eq!(fetched.len(), 2);
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_sort_descending_by_title() {
        let store = InMemoryStore::<BlogPost>::new();
        store.create(draft("Alpha", &[])).await.unwrap();
        store.create(draft("Beta", &[])).await.unwrap();

        let query = ListQuery {
            filter: Filter::default(),
            sort: Sort::parse("title:desc"),
            page: None,
        };
        let records = store.find_many(&query).await.unwrap();
        assert_eq!(records[0].title, "Beta");
        assert_eq!(records[1].title, "Alpha");
    }

    #[tokio::test]
    async fn test_page_window_skips_and_takes() {
        let store = InMemoryStore::<BlogPost>::new();
        for i in 0..5 {
            store.create(draft(&format!("P{}", i), &[])).await.unwrap();
        }

        let page = Page { page: 2, page_size: 2 };
        let records = store.find_many(&all(Some(page))).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "P2");
        assert_eq!(records[1].title, "P3");
    }
}
