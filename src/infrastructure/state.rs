use crate::domain::auth::TokenVerifier;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub page_size: i64,
}

impl AppState {
    pub fn new(pool: DbPool, token_verifier: Arc<dyn TokenVerifier>, page_size: i64) -> Self {
        Self {
            pool,
            token_verifier,
            page_size: page_size.max(1),
        }
    }
}
