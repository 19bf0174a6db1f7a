use crate::shared::error::AppError;
use axum::http::Uri;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A resolved page number together with the fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Resolves the raw `page` query value against the total row count.
    ///
    /// Missing or empty means the first page and `last` means the last one.
    /// Anything that is not a page in range is `AppError::InvalidPage`; the
    /// first page is always in range, even for an empty result.
    pub fn resolve(raw: Option<&str>, size: i64, total: i64) -> Result<Self, AppError> {
        let size = size.max(1);
        let total_pages = total_pages(total, size).max(1);

        let number = match raw.map(str::trim) {
            None | Some("") => 1,
            Some("last") => total_pages,
            Some(value) => value.parse::<i64>().map_err(|_| AppError::InvalidPage)?,
        };

        if number < 1 || number > total_pages {
            return Err(AppError::InvalidPage);
        }

        Ok(Self { number, size })
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results plus the total count across all pages.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

fn total_pages(total: i64, size: i64) -> i64 {
    if total > 0 { (total + size - 1) / size } else { 0 }
}

/// Builds `next`/`previous` links for page-number pagination.
///
/// Links keep the request path and every query parameter except `page`.
pub struct PaginationLinkBuilder {
    path: String,
    params: Vec<String>,
    page_number: i64,
    total_pages: i64,
}

impl PaginationLinkBuilder {
    pub fn from_uri(uri: &Uri, page_number: i64, page_size: i64, total: i64) -> Self {
        let params = uri
            .query()
            .unwrap_or("")
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some("page"))
            .map(str::to_string)
            .collect();

        Self {
            path: uri.path().to_string(),
            params,
            page_number,
            total_pages: total_pages(total, page_size.max(1)),
        }
    }

    pub fn next(&self) -> Option<String> {
        if self.page_number < self.total_pages {
            Some(self.page_link(self.page_number + 1))
        } else {
            None
        }
    }

    pub fn previous(&self) -> Option<String> {
        if self.page_number > 1 {
            Some(self.page_link(self.page_number - 1))
        } else {
            None
        }
    }

    fn page_link(&self, page: i64) -> String {
        let mut params = self.params.clone();
        // The first page is addressed without an explicit page parameter.
        if page > 1 {
            params.push(format!("page={}", page));
        }

        if params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, params.join("&"))
        }
    }
}
