//! Query parameters, filters, sorting and pagination envelopes
//!
//! Pagination parameters arrive as raw query-string values. Absent values
//! fall back to the defaults (page 1, pageSize 10); anything that does not
//! coerce to a positive integer is a client error, never a division attempt.

use crate::core::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query-string keys consumed by pagination/sorting; everything else
/// becomes a filter.
const RESERVED_PARAMS: &[&str] = &["page", "pageSize", "sort"];

/// Bounds applied when resolving pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// pageSize used when the parameter is absent
    pub default_page_size: u64,
    /// Hard cap on pageSize
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Raw pagination parameters as they appear in the query string
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    /// Extract `page` / `pageSize` from a parsed query string
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            page: query.get("page").cloned(),
            page_size: query.get("pageSize").cloned(),
        }
    }

    /// Resolve raw values into a validated page window
    ///
    /// Non-numeric or non-positive values are rejected with
    /// [`ValidationError::InvalidPagination`] naming the parameter.
    pub fn resolve(&self, limits: &PageLimits) -> Result<Page, ValidationError> {
        let page = parse_positive(self.page.as_deref(), "page", 1)?;
        let page_size = parse_positive(
            self.page_size.as_deref(),
            "pageSize",
            limits.default_page_size,
        )?;
        Ok(Page {
            page,
            page_size: page_size.min(limits.max_page_size),
        })
    }
}

fn parse_positive(
    raw: Option<&str>,
    param: &'static str,
    default: u64,
) -> Result<u64, ValidationError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .parse::<u64>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| ValidationError::InvalidPagination {
                param,
                value: s.to_string(),
            }),
    }
}

/// A validated page window (both values positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// Page number (starts at 1)
    pub page: u64,
    /// Number of items per page
    pub page_size: u64,
}

impl Page {
    /// Zero-based offset of the first record in this window
    ///
    /// Saturates: an absurdly large page number yields an empty page,
    /// never an overflow.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Equality/containment filters derived from leftover query parameters
#[derive(Debug, Clone, Default)]
pub struct Filter(pub Vec<(String, String)>);

impl Filter {
    /// Build filters from every query parameter not claimed by pagination
    /// or sorting
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let mut pairs: Vec<(String, String)> = query
            .iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        pairs.sort();
        Self(pairs)
    }

    /// A filter pinning one field to one value
    pub fn fixed(field: &str, value: &str) -> Self {
        Self(vec![(field.to_string(), value.to_string())])
    }
}

/// Sort expression in `field`, `field:asc` or `field:desc` form
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub descending: bool,
}

impl Sort {
    /// Parse the `sort` query parameter, falling back to the kind's
    /// default timestamp field, newest first.
    pub fn from_query(query: &HashMap<String, String>, default_field: &str) -> Self {
        match query.get("sort") {
            Some(expr) => Self::parse(expr),
            None => Self::newest_first(default_field),
        }
    }

    /// Parse a `field[:direction]` expression (unknown directions sort
    /// ascending)
    pub fn parse(expr: &str) -> Self {
        match expr.split_once(':') {
            Some((field, direction)) => Self {
                field: field.to_string(),
                descending: direction.eq_ignore_ascii_case("desc"),
            },
            None => Self {
                field: expr.to_string(),
                descending: false,
            },
        }
    }

    /// Descending sort on the given field
    pub fn newest_first(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }
}

/// Comparable key a resource exposes for sorting on one field
///
/// Cross-variant comparisons fall back to variant order; in practice a
/// given field always yields the same variant.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortValue {
    Flag(bool),
    Int(u64),
    Time(chrono::DateTime<chrono::Utc>),
    Text(String),
}

/// Everything a store needs to serve one list request
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: Filter,
    pub sort: Sort,
    /// `None` skips pagination (the filtered-list specialization)
    pub page: Option<Page>,
}

/// Single-item response envelope: `{ data }`
#[derive(Debug, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// List response envelope: `{ data, meta: { pagination } }`
#[derive(Debug, Serialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub pagination: Pagination,
}

/// Pagination metadata for list responses
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    /// `ceil(total / pageSize)`
    pub page_count: u64,
    pub total: u64,
}

impl Pagination {
    /// Compute metadata for a page window over `total` matching records
    pub fn new(page: Page, total: u64) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            page_count: total.div_ceil(page.page_size),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_page_params_defaults() {
        let page = PageParams::default().resolve(&PageLimits::default()).unwrap();
        assert_eq!(page, Page { page: 1, page_size: 10 });
    }

    #[test]
    fn test_page_params_parse_values() {
        let params = PageParams::from_query(&query(&[("page", "3"), ("pageSize", "25")]));
        let page = params.resolve(&PageLimits::default()).unwrap();
        assert_eq!(page, Page { page: 3, page_size: 25 });
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_page_params_reject_non_numeric() {
        let params = PageParams::from_query(&query(&[("page", "abc")]));
        let err = params.resolve(&PageLimits::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPagination {
                param: "page",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_page_params_reject_zero_page_size() {
        let params = PageParams::from_query(&query(&[("pageSize", "0")]));
        assert!(params.resolve(&PageLimits::default()).is_err());
    }

    #[test]
    fn test_page_params_reject_negative() {
        let params = PageParams::from_query(&query(&[("page", "-1")]));
        assert!(params.resolve(&PageLimits::default()).is_err());
    }

    #[test]
    fn test_offset_saturates_on_huge_page_number() {
        let params = PageParams::from_query(&query(&[("page", "18446744073709551615")]));
        let page = params.resolve(&PageLimits::default()).unwrap();
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn test_page_size_capped() {
        let params = PageParams::from_query(&query(&[("pageSize", "5000")]));
        let page = params.resolve(&PageLimits::default()).unwrap();
        assert_eq!(page.page_size, 100);
    }

    #[test]
    fn test_filter_skips_reserved_params() {
        let filter = Filter::from_query(&query(&[
            ("page", "2"),
            ("pageSize", "5"),
            ("sort", "title:asc"),
            ("category", "web"),
        ]));
        assert_eq!(filter.0, vec![("category".to_string(), "web".to_string())]);
    }

    #[test]
    fn test_sort_parse_directions() {
        assert_eq!(
            Sort::parse("title:asc"),
            Sort { field: "title".to_string(), descending: false }
        );
        assert_eq!(
            Sort::parse("createdAt:desc"),
            Sort { field: "createdAt".to_string(), descending: true }
        );
        assert_eq!(
            Sort::parse("title"),
            Sort { field: "title".to_string(), descending: false }
        );
    }

    #[test]
    fn test_sort_default_is_newest_first() {
        let sort = Sort::from_query(&query(&[]), "publishedAt");
        assert_eq!(sort, Sort::newest_first("publishedAt"));
    }

    #[test]
    fn test_pagination_page_count_is_ceiling() {
        let page = Page { page: 1, page_size: 10 };
        assert_eq!(Pagination::new(page, 45).page_count, 5);
        assert_eq!(Pagination::new(page, 40).page_count, 4);
        assert_eq!(Pagination::new(page, 1).page_count, 1);
        assert_eq!(Pagination::new(page, 0).page_count, 0);
    }
}
