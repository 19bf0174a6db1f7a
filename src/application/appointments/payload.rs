use crate::domain::professionals::{Professional, ProfessionalRepository};
use crate::shared::error::AppError;
use crate::shared::validation::FieldErrors;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const DATE_FORMAT_MESSAGE: &str = "Datetime has wrong format. Use RFC 3339 with a time zone offset, e.g. 2025-06-01T14:30:00Z.";
const UUID_FORMAT_MESSAGE: &str = "Must be a valid UUID.";

/// Body of create and full update; both fields are required.
///
/// Values are kept as raw JSON so that a wrongly typed value is reported on
/// its field instead of rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AppointmentRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_date")
    )]
    #[schema(value_type = Option<String>, example = "2025-06-01T14:30:00Z", format = DateTime)]
    pub date: Option<Value>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_uuid")
    )]
    #[schema(value_type = Option<String>, example = "7f0c1e52-3c1b-4f5e-9d7a-2b6a8f1e4c3d", format = Uuid)]
    pub professional_uuid: Option<Value>,
}

/// Body of partial update; only supplied fields are validated and applied.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AppointmentPatchRequest {
    #[validate(custom(function = "validate_date"))]
    #[schema(value_type = Option<String>, example = "2025-06-01T14:30:00Z", format = DateTime)]
    pub date: Option<Value>,
    #[validate(custom(function = "validate_uuid"))]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub professional_uuid: Option<Value>,
}

fn validate_date(value: &Value) -> Result<(), ValidationError> {
    date_of(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("datetime").with_message(Cow::Borrowed(DATE_FORMAT_MESSAGE)))
}

fn validate_uuid(value: &Value) -> Result<(), ValidationError> {
    uuid_of(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("uuid").with_message(Cow::Borrowed(UUID_FORMAT_MESSAGE)))
}

fn parse_date(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

/// The date carried by a JSON value, when it is an RFC 3339 string.
pub(super) fn date_of(value: &Value) -> Option<OffsetDateTime> {
    value.as_str().and_then(parse_date)
}

fn uuid_of(value: &Value) -> Option<Uuid> {
    value.as_str().and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Looks up the professional a write refers to. Unparseable or unknown
/// identifiers are recorded on `professional_uuid`; a value that already
/// failed format validation is not looked up again.
pub(super) async fn resolve_professional(
    repo: &dyn ProfessionalRepository,
    raw: Option<&Value>,
    errors: &mut FieldErrors,
) -> Result<Option<Professional>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if errors.contains("professional_uuid") {
        return Ok(None);
    }
    let Some(uuid) = uuid_of(raw) else {
        errors.add("professional_uuid", UUID_FORMAT_MESSAGE);
        return Ok(None);
    };

    let professional = repo.find_by_uuid(uuid).await?;
    if professional.is_none() {
        errors.add(
            "professional_uuid",
            format!("Object with uuid={} does not exist.", uuid),
        );
    }
    Ok(professional)
}
