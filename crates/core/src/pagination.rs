//! Pagination envelope and page arithmetic.

use serde::Serialize;

use crate::error::CoreError;

/// Page size used when the caller does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest page a caller can request; larger values are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;

/// One page of items plus the number of records matching the query
/// before paging was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub items: Vec<T>,
    pub total_records: i64,
}

impl<T> Pagination<T> {
    /// Convert the items, keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            items: self.items.into_iter().map(f).collect(),
            total_records: self.total_records,
        }
    }
}

/// Number of records to skip for a 1-based page.
///
/// No bounds checks: a `page_index` below 1 yields a negative offset.
pub fn page_offset(page_index: i64, page_size: i64) -> i64 {
    (page_index - 1).saturating_mul(page_size)
}

/// Resolve caller-supplied paging values.
///
/// Missing values fall back to page 1 and [`DEFAULT_PAGE_SIZE`]. Values below
/// 1 are rejected; sizes above [`MAX_PAGE_SIZE`] are clamped.
pub fn resolve_page(
    page_index: Option<i64>,
    page_size: Option<i64>,
) -> Result<(i64, i64), CoreError> {
    let page_index = page_index.unwrap_or(1);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page_index < 1 {
        return Err(CoreError::Validation(format!(
            "pageIndex must be at least 1, got {page_index}"
        )));
    }
    if page_size < 1 {
        return Err(CoreError::Validation(format!(
            "pageSize must be at least 1, got {page_size}"
        )));
    }

    Ok((page_index, page_size.min(MAX_PAGE_SIZE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_offset(1, 10), 0);
    }

    #[test]
    fn second_page_skips_one_page() {
        assert_eq!(page_offset(2, 2), 2);
        assert_eq!(page_offset(3, 25), 50);
    }

    #[test]
    fn page_zero_goes_negative() {
        assert_eq!(page_offset(0, 10), -10);
    }

    #[test]
    fn resolve_uses_defaults() {
        assert_eq!(resolve_page(None, None).unwrap(), (1, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn resolve_clamps_large_page_size() {
        assert_eq!(resolve_page(Some(3), Some(5000)).unwrap(), (3, MAX_PAGE_SIZE));
    }

    #[test]
    fn resolve_rejects_zero_index() {
        let err = resolve_page(Some(0), Some(10)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn resolve_rejects_negative_size() {
        assert!(resolve_page(Some(1), Some(-1)).is_err());
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let page = Pagination {
            items: vec!["a", "b"],
            total_records: 7,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalRecords"], 7);
        assert_eq!(json["items"][1], "b");
    }

    #[test]
    fn map_keeps_total() {
        let page = Pagination {
            items: vec![1, 2],
            total_records: 9,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total_records, 9);
    }
}
