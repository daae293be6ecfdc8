//! PageRequest - Which slice of a tour's ratings to return

use serde::{Deserialize, Serialize};

use super::sort::Sort;
use crate::domain::errors::DomainError;

/// Page size used when a request gives none
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound a requested page size is clamped to
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Server-wide pagination defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageDefaults {
    pub size: u32,
    pub max_size: u32,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

/// Zero-based page index, page length and optional ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort: Option<Sort>) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }

    /// Build a page request from raw query values.
    ///
    /// A negative page becomes the first page, a missing or non-positive size
    /// becomes the default and an oversized one is clamped to the maximum.
    /// An unparseable sort is a validation error.
    pub fn from_params(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
        defaults: &PageDefaults,
    ) -> Result<Self, DomainError> {
        let page = page
            .unwrap_or(0)
            .clamp(0, i64::from(u32::MAX)) as u32;

        let max_size = defaults.max_size.max(1);
        let size = match size {
            Some(s) if s > i64::from(max_size) => {
                tracing::debug!("Clamping page size {} to {}", s, max_size);
                max_size
            }
            Some(s) if s > 0 => s as u32,
            _ => defaults.size.clamp(1, max_size),
        };

        let sort = match sort.map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(Sort::parse(raw)?),
            _ => None,
        };

        Ok(Self { page, size, sort })
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{RatingSortField, SortDirection};

    #[test]
    fn test_defaults_when_params_missing() {
        let page = PageRequest::from_params(None, None, None, &PageDefaults::default()).unwrap();
        assert_eq!(page, PageRequest::new(0, DEFAULT_PAGE_SIZE, None));
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_and_limit() {
        let page =
            PageRequest::from_params(Some(2), Some(3), None, &PageDefaults::default()).unwrap();
        assert_eq!(page.offset(), 6);
        assert_eq!(page.limit(), 3);
    }

    #[test]
    fn test_out_of_range_values_are_normalized() {
        let defaults = PageDefaults {
            size: 10,
            max_size: 50,
        };

        let page = PageRequest::from_params(Some(-4), Some(0), None, &defaults).unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 10);

        let page = PageRequest::from_params(Some(1), Some(500), None, &defaults).unwrap();
        assert_eq!(page.size, 50);
    }

    #[test]
    fn test_sort_is_parsed() {
        let page = PageRequest::from_params(
            Some(1),
            Some(3),
            Some("score,desc"),
            &PageDefaults::default(),
        )
        .unwrap();
        let sort = page.sort.unwrap();
        assert_eq!(sort.field, RatingSortField::Score);
        assert_eq!(sort.direction, SortDirection::Desc);

        let page =
            PageRequest::from_params(None, None, Some("  "), &PageDefaults::default()).unwrap();
        assert!(page.sort.is_none());
    }

    #[test]
    fn test_bad_sort_is_validation_error() {
        let result =
            PageRequest::from_params(None, None, Some("price"), &PageDefaults::default());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
