use crate::application::professionals::create::CreateProfessionalUseCase;
use crate::application::professionals::delete::DeleteProfessionalUseCase;
use crate::application::professionals::get::GetProfessionalUseCase;
use crate::application::professionals::list::ListProfessionalsUseCase;
use crate::application::professionals::payload::ProfessionalPayload;
use crate::application::professionals::update::UpdateProfessionalUseCase;
use crate::domain::professionals::{Address, Contact, Professional};
use crate::infrastructure::repositories::professionals::PostgresProfessionalRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::dtos::ContactKindDto;
use crate::presentation::extractors::ResourceId;
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

#[derive(Serialize, ToSchema)]
pub struct AddressResource {
    pub street: String,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    #[schema(example = "12345678")]
    pub zip_code: String,
}

impl From<Address> for AddressResource {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            neighborhood: address.neighborhood,
            complement: address.complement,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ContactResource {
    pub kind: ContactKindDto,
    pub value: String,
}

impl From<Contact> for ContactResource {
    fn from(contact: Contact) -> Self {
        Self {
            kind: contact.kind.into(),
            value: contact.value,
        }
    }
}

/// Summary shape used by list, create and update responses.
#[derive(Serialize, ToSchema)]
pub struct ProfessionalResource {
    #[schema(value_type = String, format = Uuid)]
    pub uuid: uuid::Uuid,
    pub social_name: String,
    pub profession: String,
    pub address: Option<AddressResource>,
    pub contacts: Vec<ContactResource>,
}

impl From<Professional> for ProfessionalResource {
    fn from(professional: Professional) -> Self {
        Self {
            uuid: professional.uuid,
            social_name: professional.social_name,
            profession: professional.profession,
            address: professional.address.map(AddressResource::from),
            contacts: professional
                .contacts
                .into_iter()
                .map(ContactResource::from)
                .collect(),
        }
    }
}

/// Retrieve shape: the summary plus timestamps.
#[derive(Serialize, ToSchema)]
pub struct ProfessionalDetailResource {
    #[serde(flatten)]
    pub professional: ProfessionalResource,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Professional> for ProfessionalDetailResource {
    fn from(professional: Professional) -> Self {
        let created_at = professional.created_at;
        let updated_at = professional.updated_at;
        Self {
            professional: ProfessionalResource::from(professional),
            created_at,
            updated_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct ListProfessionalsQuery {
    /// Page number, or `last`
    #[param(example = "1")]
    pub page: Option<String>,
}

fn repository(state: &AppState) -> Arc<PostgresProfessionalRepository> {
    Arc::new(PostgresProfessionalRepository::new(state.pool.clone()))
}

/// List professionals ordered by social name
#[utoipa::path(
    get,
    path = "/api/v1/professionals/",
    params(ListProfessionalsQuery),
    responses(
        (status = 200, description = "Page of professionals", body = PaginatedResponse<ProfessionalResource>),
        (status = 404, description = "Invalid page", body = ErrorResponse)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_professionals(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListProfessionalsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListProfessionalsUseCase::new(repository(&state), state.page_size);

    let page = use_case.execute(query.page.as_deref()).await?;

    Ok(Json(PaginatedResponse::<ProfessionalResource>::from_page(
        page, &uri,
    )))
}

/// Create a professional with its address and contacts
#[utoipa::path(
    post,
    path = "/api/v1/professionals/",
    request_body = ProfessionalPayload,
    responses(
        (status = 201, description = "Professional created", body = ProfessionalResource),
        (status = 400, description = "Validation error", body = FieldErrors)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_professional(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProfessionalPayload>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateProfessionalUseCase::new(repository(&state));

    let professional = use_case.execute(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProfessionalResource::from(professional)),
    ))
}

/// Get a professional by external identifier
#[utoipa::path(
    get,
    path = "/api/v1/professionals/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Professional identifier")
    ),
    responses(
        (status = 200, description = "Professional found", body = ProfessionalDetailResource),
        (status = 404, description = "Professional not found", body = ErrorResponse)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_professional(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetProfessionalUseCase::new(repository(&state));

    let professional = use_case.execute(uuid).await?;

    Ok(Json(ProfessionalDetailResource::from(professional)))
}

/// Replace a professional, its address and its contacts
#[utoipa::path(
    put,
    path = "/api/v1/professionals/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Professional identifier")
    ),
    request_body = ProfessionalPayload,
    responses(
        (status = 200, description = "Professional updated", body = ProfessionalResource),
        (status = 400, description = "Validation error", body = FieldErrors),
        (status = 404, description = "Professional not found", body = ErrorResponse)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_professional(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
    JsonBody(payload): JsonBody<ProfessionalPayload>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateProfessionalUseCase::new(repository(&state));

    let professional = use_case.execute(uuid, payload).await?;

    Ok(Json(ProfessionalResource::from(professional)))
}

/// Partial update; the complete payload is still required
#[utoipa::path(
    patch,
    path = "/api/v1/professionals/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Professional identifier")
    ),
    request_body = ProfessionalPayload,
    responses(
        (status = 200, description = "Professional updated", body = ProfessionalResource),
        (status = 400, description = "Validation error", body = FieldErrors),
        (status = 404, description = "Professional not found", body = ErrorResponse)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn partial_update_professional(
    state: State<AppState>,
    id: ResourceId,
    body: JsonBody<ProfessionalPayload>,
) -> Result<impl IntoResponse, AppError> {
    update_professional(state, id, body).await
}

/// Delete a professional with its address, contacts and appointments
#[utoipa::path(
    delete,
    path = "/api/v1/professionals/{uuid}/",
    params(
        ("uuid" = String, Path, description = "Professional identifier")
    ),
    responses(
        (status = 204, description = "Professional deleted"),
        (status = 404, description = "Professional not found", body = ErrorResponse)
    ),
    tag = "professionals",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_professional(
    State(state): State<AppState>,
    ResourceId(uuid): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteProfessionalUseCase::new(repository(&state));

    use_case.execute(uuid).await?;

    Ok(StatusCode::NO_CONTENT)
}
