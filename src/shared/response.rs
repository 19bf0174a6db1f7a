use crate::shared::pagination::{Page, PaginationLinkBuilder};
use axum::http::Uri;
use serde::Serialize;
use utoipa::ToSchema;

/// Paginated list envelope: `{count, next, previous, results}`.
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    #[schema(example = 1)]
    pub count: i64,
    #[schema(example = "/api/v1/professionals/?page=2")]
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page<S>(page: Page<S>, uri: &Uri) -> Self
    where
        T: From<S>,
    {
        let links = PaginationLinkBuilder::from_uri(
            uri,
            page.request.number,
            page.request.size,
            page.total,
        );

        Self {
            count: page.total,
            next: links.next(),
            previous: links.previous(),
            results: page.items.into_iter().map(T::from).collect(),
        }
    }
}
