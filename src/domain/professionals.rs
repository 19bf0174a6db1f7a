use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Channel through which a professional can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactKind {
    Whatsapp,
    Mobile,
    Phone,
    Email,
    Linkedin,
}

impl ContactKind {
    pub const ALL: [ContactKind; 5] = [
        ContactKind::Whatsapp,
        ContactKind::Mobile,
        ContactKind::Phone,
        ContactKind::Email,
        ContactKind::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Whatsapp => "whatsapp",
            ContactKind::Mobile => "mobile",
            ContactKind::Phone => "phone",
            ContactKind::Email => "email",
            ContactKind::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("\"{}\" is not a valid choice.", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

/// A professional with the address surfaced on reads (the first one owned,
/// if any) and every owned contact.
#[derive(Debug, Clone)]
pub struct Professional {
    pub id: i64,
    pub uuid: Uuid,
    pub social_name: String,
    pub profession: String,
    pub address: Option<Address>,
    pub contacts: Vec<Contact>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Validated write data: exactly one address and at least one contact.
#[derive(Debug, Clone)]
pub struct ProfessionalData {
    pub social_name: String,
    pub profession: String,
    pub address: Address,
    pub contacts: Vec<Contact>,
}

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    /// Inserts the professional, its address and contacts as one unit.
    async fn create(&self, data: ProfessionalData) -> Result<Professional, anyhow::Error>;
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Professional>, anyhow::Error>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Professional>, anyhow::Error>;
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Professional>, anyhow::Error>;
    async fn count(&self) -> Result<i64, anyhow::Error>;
    /// Replaces scalar fields, the whole address set and the whole contact
    /// set in one unit. `None` when no professional has this id.
    async fn update(
        &self,
        id: i64,
        data: ProfessionalData,
    ) -> Result<Option<Professional>, anyhow::Error>;
    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error>;
}
