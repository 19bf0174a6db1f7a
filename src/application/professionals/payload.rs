use crate::domain::professionals::{Address, Contact, ContactKind, ProfessionalData};
use crate::shared::error::AppError;
use crate::shared::validation::{collect, not_blank};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Write payload shared by create, update and partial update.
///
/// Every field is optional at the serde level so that a missing field is
/// reported with the other field errors instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProfessionalPayload {
    #[validate(
        required(message = "Social name is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "Dr. Ana Souza", max_length = 255)]
    pub social_name: Option<String>,
    #[validate(
        required(message = "Profession is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "Psychologist", max_length = 255)]
    pub profession: Option<String>,
    #[validate(required(message = "Address is required."), nested)]
    pub address: Option<AddressPayload>,
    #[validate(
        required(message = "At least one contact is required."),
        length(min = 1, message = "At least one contact is required."),
        nested
    )]
    pub contacts: Option<Vec<ContactPayload>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "Rua das Flores")]
    pub street: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    #[schema(example = "42")]
    pub number: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub neighborhood: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub complement: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "São Paulo")]
    pub city: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "SP")]
    pub state: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_zip_code")
    )]
    #[schema(example = "01310100", pattern = r"^\d{8}$")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_contact_kind")
    )]
    #[schema(example = "email")]
    pub kind: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    #[schema(example = "ana@example.com")]
    pub value: Option<String>,
}

fn validate_zip_code(zip_code: &str) -> Result<(), ValidationError> {
    if zip_code.len() == 8 && zip_code.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("zip_code")
        .with_message(Cow::Borrowed("Zip code must contain exactly 8 numeric digits.")))
}

fn validate_contact_kind(kind: &str) -> Result<(), ValidationError> {
    kind.parse::<ContactKind>()
        .map(|_| ())
        .map_err(|message| ValidationError::new("choice").with_message(Cow::Owned(message)))
}

impl ProfessionalPayload {
    /// Validates the whole payload, aggregating every failure, and converts
    /// it into write data.
    pub fn into_data(self) -> Result<ProfessionalData, AppError> {
        let errors = collect(self.validate());

        match self.into_complete() {
            Some(data) if errors.is_empty() => Ok(data),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// `None` as soon as a required value is absent or unusable.
    fn into_complete(self) -> Option<ProfessionalData> {
        let address = self.address?;
        let contacts = self
            .contacts?
            .into_iter()
            .map(ContactPayload::into_contact)
            .collect::<Option<Vec<_>>>()?;

        Some(ProfessionalData {
            social_name: self.social_name?,
            profession: self.profession?,
            address: Address {
                street: address.street?,
                number: address.number,
                neighborhood: address.neighborhood,
                complement: address.complement,
                city: address.city?,
                state: address.state?,
                zip_code: address.zip_code?,
            },
            contacts,
        })
    }
}

impl ContactPayload {
    fn into_contact(self) -> Option<Contact> {
        Some(Contact {
            kind: self.kind?.parse::<ContactKind>().ok()?,
            value: self.value?,
        })
    }
}
