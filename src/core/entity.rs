//! Resource trait defining the per-kind contract
//!
//! Each REST resource kind (blog post, project) implements [`Resource`]
//! once; everything else — the service, the store, the handlers — is
//! generic over it.

use crate::core::query::SortValue;
use crate::core::validation::ValidationError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Contract implemented by every resource kind served by the API.
///
/// A resource has three shapes on the wire:
/// - the full record (`Self`), returned from every operation
/// - `Draft`, the create payload, validated for required fields
/// - `Patch`, the update payload, where absent fields keep their previous
///   values (partial-merge semantics live in [`apply_patch`])
///
/// [`apply_patch`]: Resource::apply_patch
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Create payload shape
    type Draft: DeserializeOwned + Send + Sync + 'static;

    /// Update payload shape (all fields optional)
    type Patch: DeserializeOwned + Send + Sync + 'static;

    /// Singular kind name used in errors and logs (e.g., "blog post")
    fn kind() -> &'static str;

    /// Plural kind name used in list errors (e.g., "blog posts")
    fn kind_plural() -> &'static str;

    /// Store-assigned identifier
    fn id(&self) -> u64;

    /// Field the default newest-first sort orders by
    fn sort_field() -> &'static str;

    /// Check a create payload against the kind's required-field and
    /// format rules
    fn validate_create(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Check an update payload; required fields are not re-checked, only
    /// formats of fields actually supplied
    fn validate_update(patch: &Self::Patch) -> Result<(), ValidationError>;

    /// Materialize a record from a validated draft, applying create-time
    /// defaults
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Merge a patch into this record; absent fields are untouched
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Filter predicate: does this record match `field = value`?
    ///
    /// Equality for scalar fields, containment for collection fields.
    /// Unknown fields match nothing.
    fn matches(&self, field: &str, value: &str) -> bool;

    /// Comparable key for sorting on `field`, if the field is sortable
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}
