use crate::presentation::handlers;
use crate::presentation::middleware::auth::require_scope;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::routes;
use axum::{Router, middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::state::AppState;

pub fn app(state: AppState) -> Router {
    // Every resource route needs a token with the scope for its method.
    let api = Router::new()
        .merge(routes::professionals::routes())
        .merge(routes::appointments::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_scope))
        .route("/health/", get(handlers::health::health_check));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/schema/", ApiDoc::openapi()))
        .nest("/api/v1", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
