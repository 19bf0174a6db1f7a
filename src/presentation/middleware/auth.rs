use crate::domain::auth::{READ_SCOPE, WRITE_SCOPE};
use crate::presentation::extractors::Authenticated;
use crate::shared::error::AppError;
use axum::{extract::Request, http::Method, middleware::Next, response::Response};

/// Scope a request needs: safe methods read, everything else writes.
pub fn required_scope(method: &Method) -> &'static str {
    match *method {
        Method::GET | Method::HEAD | Method::OPTIONS => READ_SCOPE,
        _ => WRITE_SCOPE,
    }
}

pub async fn require_scope(
    auth: Authenticated,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let scope = required_scope(request.method());

    if !auth.claims.has_scope(scope) {
        tracing::warn!(
            "Token for {} lacks the {} scope for {} {}",
            auth.claims.sub,
            scope,
            request.method(),
            request.uri().path()
        );
        return Err(AppError::Forbidden(
            "You do not have permission to perform this action.".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
