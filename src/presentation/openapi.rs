use crate::application::appointments::payload::{AppointmentPatchRequest, AppointmentRequest};
use crate::application::professionals::payload::{
    AddressPayload, ContactPayload, ProfessionalPayload,
};
use crate::presentation::dtos::ContactKindDto;
use crate::presentation::handlers::appointments::{
    AppointmentDetailResource, AppointmentResource,
};
use crate::presentation::handlers::professionals::{
    AddressResource, ContactResource, ProfessionalDetailResource, ProfessionalResource,
};
use crate::shared::error::ErrorResponse;
use crate::shared::response::PaginatedResponse;
use crate::shared::validation::FieldErrors;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinica API",
        version = "0.1.0",
        description = "Healthcare professionals and their appointments.\n\nEvery resource endpoint expects an OAuth2 bearer token: `read` scope for safe methods, `write` for the rest."
    ),
    paths(
        crate::presentation::handlers::professionals::list_professionals,
        crate::presentation::handlers::professionals::create_professional,
        crate::presentation::handlers::professionals::get_professional,
        crate::presentation::handlers::professionals::update_professional,
        crate::presentation::handlers::professionals::partial_update_professional,
        crate::presentation::handlers::professionals::delete_professional,
        crate::presentation::handlers::appointments::list_appointments,
        crate::presentation::handlers::appointments::create_appointment,
        crate::presentation::handlers::appointments::get_appointment,
        crate::presentation::handlers::appointments::update_appointment,
        crate::presentation::handlers::appointments::partial_update_appointment,
        crate::presentation::handlers::appointments::delete_appointment,
    ),
    components(
        schemas(
            ContactKindDto,

            // Request bodies
            ProfessionalPayload,
            AddressPayload,
            ContactPayload,
            AppointmentRequest,
            AppointmentPatchRequest,

            // Representations
            AddressResource,
            ContactResource,
            ProfessionalResource,
            ProfessionalDetailResource,
            AppointmentResource,
            AppointmentDetailResource,
            PaginatedResponse<ProfessionalResource>,
            PaginatedResponse<AppointmentDetailResource>,

            // Errors
            ErrorResponse,
            FieldErrors,
        )
    ),
    tags(
        (name = "professionals", description = "Healthcare professionals with address and contacts"),
        (name = "appointments", description = "Appointments booked with a professional")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
