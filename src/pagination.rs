//! Page/limit bookkeeping for list responses.

use std::num::NonZeroUsize;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("default page limit must be a positive integer, got {0}")]
pub struct InvalidDefaultLimit(pub usize);

/// Validated fallback page size taken from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultLimit(NonZeroUsize);

impl DefaultLimit {
    pub fn new(value: usize) -> Result<Self, InvalidDefaultLimit> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(InvalidDefaultLimit(value))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// Pagination metadata returned next to a page of results.
///
/// `offset` is what the repository must receive for the page to match the
/// reported `page`/`limit`; it is not part of the serialized payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    #[serde(skip)]
    offset: usize,
}

impl Meta {
    /// Resolves the effective page and limit. Missing or zero values fall
    /// back to page 1 and `default_limit`.
    pub fn new(
        page: Option<usize>,
        limit: Option<usize>,
        total: usize,
        default_limit: DefaultLimit,
    ) -> Self {
        let limit = limit.filter(|l| *l > 0).unwrap_or(default_limit.get());
        let page = page.filter(|p| *p > 0).unwrap_or(1);

        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
            offset: (page - 1).saturating_mul(limit),
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> DefaultLimit {
        DefaultLimit::new(10).unwrap()
    }

    #[test]
    fn default_limit_rejects_zero() {
        assert_eq!(DefaultLimit::new(0), Err(InvalidDefaultLimit(0)));
        assert_eq!(DefaultLimit::new(5).unwrap().get(), 5);
    }

    #[test]
    fn third_page_of_twenty_five() {
        let meta = Meta::new(Some(3), Some(10), 25, ten());
        assert_eq!(meta.offset(), 20);
        assert_eq!(meta.limit(), 10);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn missing_values_use_defaults() {
        let meta = Meta::new(None, None, 7, DefaultLimit::new(5).unwrap());
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 5);
        assert_eq!(meta.offset(), 0);
        assert_eq!(meta.total_pages, 2);
    }

    #[test]
    fn zero_values_use_defaults() {
        let meta = Meta::new(Some(0), Some(0), 0, ten());
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn page_beyond_total_is_kept() {
        let meta = Meta::new(Some(9), Some(10), 25, ten());
        assert_eq!(meta.page, 9);
        assert_eq!(meta.offset(), 80);
    }

    #[test]
    fn offset_is_not_serialized() {
        let meta = Meta::new(Some(2), Some(10), 25, ten());
        let value = serde_json::to_value(meta).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"page": 2, "limit": 10, "total": 25, "total_pages": 3})
        );
    }
}
