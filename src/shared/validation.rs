use crate::shared::error::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field name -> messages. Nested payloads map to nested objects, lists to
/// one object per item (empty for items without errors).
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(example = json!({ "address": { "zip_code": ["Zip code must contain exactly 8 numeric digits."] } }))]
pub struct FieldErrors(BTreeMap<String, Value>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let entry = self
            .0
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));

        match entry {
            Value::Array(messages) => messages.push(Value::String(message.into())),
            // A nested object already sits under this field; keep both.
            other => {
                let nested = std::mem::take(other);
                *other = Value::Array(vec![nested, Value::String(message.into())]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// `Ok(())` when nothing was collected, the aggregated error otherwise.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        Self(
            errors_to_map(&errors)
                .into_iter()
                .collect::<BTreeMap<_, _>>(),
        )
    }
}

/// Runs `validate` and turns the outcome into collected field errors, so
/// callers can keep adding checks that need storage lookups.
pub fn collect(result: Result<(), ValidationErrors>) -> FieldErrors {
    match result {
        Ok(()) => FieldErrors::default(),
        Err(errors) => FieldErrors::from(errors),
    }
}

fn errors_to_map(errors: &ValidationErrors) -> Map<String, Value> {
    let mut map = Map::new();

    for (field, kind) in errors.errors() {
        let value = match kind {
            ValidationErrorsKind::Field(field_errors) => Value::Array(
                field_errors
                    .iter()
                    .map(|e| Value::String(message_for(e)))
                    .collect(),
            ),
            ValidationErrorsKind::Struct(nested) => Value::Object(errors_to_map(nested)),
            ValidationErrorsKind::List(items) => {
                let len = items.keys().max().map(|last| last + 1).unwrap_or(0);
                let mut list = vec![Value::Object(Map::new()); len];
                for (index, nested) in items {
                    list[*index] = Value::Object(errors_to_map(nested));
                }
                Value::Array(list)
            }
        };
        map.insert(field.to_string(), value);
    }

    map
}

fn message_for(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => match error.code.as_ref() {
            "required" => "This field is required.".to_string(),
            "length" => "Ensure this field has a valid length.".to_string(),
            code => format!("Invalid value ({}).", code),
        },
    }
}

/// Rejects empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

/// JSON body extractor whose rejection is a 400 with a `detail` message.
/// Field validation is left to the use case so lookups (404) run first.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!("Rejected request body: {}", e.body_text());
            AppError::BadRequest(e.body_text())
        })?;

        Ok(JsonBody(value))
    }
}
