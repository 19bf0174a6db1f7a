use crate::domain::professionals::{Address, Contact, ContactKind, Professional};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ProfessionalDbModel {
    pub id: i64,
    pub uuid: Uuid,
    pub social_name: String,
    pub profession: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct AddressDbModel {
    pub id: i64,
    pub professional_id: i64,
    pub street: String,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ContactDbModel {
    pub id: i64,
    pub professional_id: i64,
    pub kind: String,
    pub value: String,
}

impl ProfessionalDbModel {
    pub fn into_domain(
        self,
        address: Option<AddressDbModel>,
        contacts: Vec<ContactDbModel>,
    ) -> Result<Professional, anyhow::Error> {
        let contacts = contacts
            .into_iter()
            .map(Contact::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Professional {
            id: self.id,
            uuid: self.uuid,
            social_name: self.social_name,
            profession: self.profession,
            address: address.map(Address::from),
            contacts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<AddressDbModel> for Address {
    fn from(model: AddressDbModel) -> Self {
        Self {
            street: model.street,
            number: model.number,
            neighborhood: model.neighborhood,
            complement: model.complement,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
        }
    }
}

impl TryFrom<ContactDbModel> for Contact {
    type Error = anyhow::Error;

    fn try_from(model: ContactDbModel) -> Result<Self, Self::Error> {
        let kind: ContactKind = model
            .kind
            .parse()
            .map_err(|e: String| anyhow::anyhow!("contact {}: {}", model.id, e))?;

        Ok(Self {
            kind,
            value: model.value,
        })
    }
}
