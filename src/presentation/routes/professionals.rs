use crate::presentation::handlers::professionals;
use axum::{Router, routing::get};

use crate::infrastructure::state::AppState;

/// Professional routes, mounted under the API prefix
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/professionals/",
            get(professionals::list_professionals).post(professionals::create_professional),
        )
        .route(
            "/professionals/{uuid}/",
            get(professionals::get_professional)
                .put(professionals::update_professional)
                .patch(professionals::partial_update_professional)
                .delete(professionals::delete_professional),
        )
}
