use crate::application::appointments::create::CreateAppointmentUseCase;
use crate::application::appointments::delete::DeleteAppointmentUseCase;
use crate::application::appointments::get::GetAppointmentUseCase;
use crate::application::appointments::list::{ListAppointmentsUseCase, ProfessionalFilter};
use crate::application::appointments::payload::{AppointmentPatchRequest, AppointmentRequest};
use crate::application::appointments::update::UpdateAppointmentUseCase;
use crate::domain::appointments::{Appointment, AppointmentDetail};
use crate::infrastructure::repositories::appointments::PostgresAppointmentRepository;
use crate::infrastructure::repositories::professionals::PostgresProfessionalRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::ResourceId;
use crate::presentation::handlers::professionals::ProfessionalResource;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::PaginatedResponse;
use crate::shared::validation::{FieldErrors, JsonBody};
use axum::{
    Json,
    extract::{OriginalUri, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

/// Write response: the professional is referenced by identifier.
#[derive(Serialize, ToSchema)]
pub struct AppointmentResource {
    #[schema(value_type = String, format = Uuid)]
    pub uuid: uuid::Uuid,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub date: time::OffsetDateTime,
    #[schema(value_type = String, format = Uuid)]
    pub professional_uuid: uuid::Uuid,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Appointment> for AppointmentResource {
    fn from(appointment: Appointment) -> Self {
        Self {
            uuid: appointment.uuid,
            date: appointment.date,
            professional_uuid: appointment.professional_uuid,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

/// Read response: the professional is embedded.
#[derive(Serialize, ToSchema)]
pub struct AppointmentDetailResource {
    #[schema(value_type = String, format = Uuid)]
    pub uuid: uuid::Uuid,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub date: time::OffsetDateTime,
    pub professional: ProfessionalResource,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: time::OffsetDateTime,
}

impl From<AppointmentDetail> for AppointmentDetailResource {
    fn from(detail: AppointmentDetail) -> Self {
        let appointment = detail.appointment;
        Self {
            uuid: appointment.uuid,
            date: appointment.date,
            professional: ProfessionalResource::from(detail.professional),
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ListAppointmentsQuery {
    /// Only appointments of this professional
    pub professional_uuid: Option<String>,
    /// Page number, or `last`
    #[param(example = "1")]
    pub page: Option<String>,
}

fn repositories(
    state: &AppState,
) -> (
    Arc<PostgresAppointmentRepository>,
    Arc<PostgresProfessionalRepository>,
) {
    (
        Arc::new(PostgresAppointmentRepository::new(state.pool.clone())),
        Arc::new(PostgresProfessionalRepository::new(state.pool.clone())),
    )
}

/// List appointments, newest first
#[utoipa::path(
    get,
    path = "/api/v1/appointments/",
    params(ListAppointmentsQuery),
    responses(
        (status = 200, description = "Page of appointments", body = PaginatedResponse<AppointmentDetailResource>),
        (status = 404, description = "Invalid page", body = ErrorResponse)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (repo, professionals) = repositories(&state);
    let use_case = ListAppointmentsUseCase::new(repo, professionals, state.page_size);

    let filter = ProfessionalFilter::parse(query.professional_uuid.as_deref());
    let page = use_case.execute(filter, query.page.as_deref()).await?;

    Ok(Json(
        PaginatedResponse::<AppointmentDetailResource>::from_page(page, &uri),
    ))
}

/// Book an appointment with a professional
#[utoipa::path(
    post,
    path = "/api/v1/appointments/",
    request_body = AppointmentRequest,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResource),
        (status = 400, description = "Validation error", body = FieldErrors)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (repo, professionals) = repositories(&state);
    let use_case = CreateAppointmentUseCase::new(repo, professionals);

    let appointment = use_case.execute(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResource::from(appointment)),
    ))
}

/// Get an appointment by external identifier
#[utoipa::path(
    get,
    path = "/api/v1/appointments/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Appointment identifier")
    ),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentDetailResource),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let (repo, professionals) = repositories(&state);
    let use_case = GetAppointmentUseCase::new(repo, professionals);

    let detail = use_case.execute(uuid).await?;

    Ok(Json(AppointmentDetailResource::from(detail)))
}

/// Replace an appointment's date and professional
#[utoipa::path(
    put,
    path = "/api/v1/appointments/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Appointment identifier")
    ),
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentResource),
        (status = 400, description = "Validation error", body = FieldErrors),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
    JsonBody(req): JsonBody<AppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (repo, professionals) = repositories(&state);
    let use_case = UpdateAppointmentUseCase::new(repo, professionals);

    let appointment = use_case.replace(uuid, req).await?;

    Ok(Json(AppointmentResource::from(appointment)))
}

/// Update only the supplied fields of an appointment
#[utoipa::path(
    patch,
    path = "/api/v1/appointments/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Appointment identifier")
    ),
    request_body = AppointmentPatchRequest,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentResource),
        (status = 400, description = "Validation error", body = FieldErrors),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn partial_update_appointment(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
    JsonBody(req): JsonBody<AppointmentPatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (repo, professionals) = repositories(&state);
    let use_case = UpdateAppointmentUseCase::new(repo, professionals);

    let appointment = use_case.patch(uuid, req).await?;

    Ok(Json(AppointmentResource::from(appointment)))
}

/// Delete an appointment; its professional is kept
#[utoipa::path(
    delete,
    path = "/api/v1/appointments/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Appointment identifier")
    ),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found", body = ErrorResponse)
    ),
    tag = "appointments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let (repo, _) = repositories(&state);
    let use_case = DeleteAppointmentUseCase::new(repo);

    use_case.execute(uuid).await?;

    Ok(StatusCode::NO_CONTENT)
}
