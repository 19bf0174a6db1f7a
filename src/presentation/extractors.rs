use crate::domain::auth::AccessClaims;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::{header, request::Parts},
};
use uuid::Uuid;

/// Caller holding a valid bearer access token
pub struct Authenticated {
    pub claims: AccessClaims,
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Authentication credentials were not provided.".to_string())
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::Unauthorized("Invalid Authorization header format.".to_string())
            })?;

        let claims = state.token_verifier.verify(token).map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            AppError::Unauthorized("Invalid or expired token.".to_string())
        })?;

        Ok(Authenticated { claims })
    }
}

/// External identifier from the path. Anything that is not a uuid can match
/// no resource, so it is a 404 rather than a 400.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Uuid);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        Uuid::parse_str(&raw)
            .map(ResourceId)
            .map_err(|_| AppError::NotFound)
    }
}
