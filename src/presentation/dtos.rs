use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::professionals::ContactKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactKindDto {
    Whatsapp,
    Mobile,
    Phone,
    Email,
    Linkedin,
}

impl From<ContactKind> for ContactKindDto {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Whatsapp => ContactKindDto::Whatsapp,
            ContactKind::Mobile => ContactKindDto::Mobile,
            ContactKind::Phone => ContactKindDto::Phone,
            ContactKind::Email => ContactKindDto::Email,
            ContactKind::Linkedin => ContactKindDto::Linkedin,
        }
    }
}
