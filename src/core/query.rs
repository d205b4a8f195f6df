//! Pagination requests, pages and query-string parsing

use crate::core::error::RequestError;
use serde::{Deserialize, Serialize};

/// Ordering of a listing by identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Parse a sort expression.
    ///
    /// Accepted forms: `asc`, `desc`, `id`, `id,asc`, `id,desc`
    /// (case-insensitive). Only the identity column is sortable.
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        let invalid = || RequestError::InvalidSort {
            value: value.to_string(),
        };

        let mut parts = value.split(',').map(|p| p.trim().to_ascii_lowercase());
        let first = parts.next().ok_or_else(invalid)?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let direction = match (first.as_str(), second.as_deref()) {
            ("asc", None) => SortDirection::Asc,
            ("desc", None) | ("id", None) => SortDirection::Desc,
            ("id", Some("asc")) => SortDirection::Asc,
            ("id", Some("desc")) => SortDirection::Desc,
            _ => return Err(invalid()),
        };
        Ok(direction)
    }
}

/// A page request: 0-based page number, page size and sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub direction: SortDirection,
}

impl PageRequest {
    pub const DEFAULT_SIZE: usize = 20;

    pub fn new(page: usize, size: usize, direction: SortDirection) -> Self {
        Self {
            page,
            size: size.max(1),
            direction,
        }
    }

    /// Page `page` with the default size, newest first
    pub fn of(page: usize) -> Self {
        Self::new(page, Self::DEFAULT_SIZE, SortDirection::Desc)
    }

    /// Number of rows before this page, `None` when it does not fit in `usize`
    pub fn offset(&self) -> Option<usize> {
        self.page.checked_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::of(0)
    }
}

/// Query parameters of a listing endpoint
///
/// ```text
/// GET /currencies?page=1&size=50&sort=id,asc
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl PageParams {
    /// Resolve against the configured default and maximum page sizes
    pub fn into_request(
        self,
        default_size: usize,
        max_size: usize,
    ) -> Result<PageRequest, RequestError> {
        let direction = match self.sort.as_deref() {
            Some(sort) if !sort.trim().is_empty() => SortDirection::parse(sort)?,
            _ => SortDirection::default(),
        };
        let size = self.size.unwrap_or(default_size).clamp(1, max_size.max(1));
        Ok(PageRequest::new(self.page.unwrap_or(0), size, direction))
    }
}

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Requested page size
    pub size: usize,
    /// Page number (0-based)
    pub number: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PageMetadata {
    pub fn new(request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size.max(1) as u64;
        Self {
            size: request.size,
            number: request.page,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: PageMetadata::new(request, total_elements),
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page.number as u64).saturating_add(1) < self.page.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
        }
    }
}
