use crate::presentation::handlers::appointments;
use axum::{Router, routing::get};

use crate::infrastructure::state::AppState;

/// Appointment routes, mounted under the API prefix
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/appointments/",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/appointments/{uuid}/",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .patch(appointments::partial_update_appointment)
                .delete(appointments::delete_appointment),
        )
}
