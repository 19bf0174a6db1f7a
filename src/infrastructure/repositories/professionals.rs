use crate::domain::professionals::{
    Address, Contact, Professional, ProfessionalData, ProfessionalRepository,
};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::professionals::{
    AddressDbModel, ContactDbModel, ProfessionalDbModel,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::collections::HashMap;
use uuid::Uuid;

const PROFESSIONAL_COLUMNS: &str = "id, uuid, social_name, profession, created_at, updated_at";
const ADDRESS_COLUMNS: &str =
    "id, professional_id, street, number, neighborhood, complement, city, state, zip_code";
const CONTACT_COLUMNS: &str = "id, professional_id, kind, value";

#[derive(Clone)]
pub struct PostgresProfessionalRepository {
    pool: DbPool,
}

impl PostgresProfessionalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Loads addresses and contacts for a batch of professionals. Only the
    /// first address (by street) is kept for each.
    async fn with_children(
        &self,
        rows: Vec<ProfessionalDbModel>,
    ) -> Result<Vec<Professional>, anyhow::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let addresses = sqlx::query_as::<_, AddressDbModel>(&format!(
            "SELECT {} FROM addresses WHERE professional_id = ANY($1) ORDER BY professional_id, street, id",
            ADDRESS_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let contacts = sqlx::query_as::<_, ContactDbModel>(&format!(
            "SELECT {} FROM contacts WHERE professional_id = ANY($1) ORDER BY professional_id, kind, id",
            CONTACT_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut first_address: HashMap<i64, AddressDbModel> = HashMap::new();
        for address in addresses {
            first_address.entry(address.professional_id).or_insert(address);
        }

        let mut contacts_by_owner: HashMap<i64, Vec<ContactDbModel>> = HashMap::new();
        for contact in contacts {
            contacts_by_owner
                .entry(contact.professional_id)
                .or_default()
                .push(contact);
        }

        rows.into_iter()
            .map(|row| {
                let address = first_address.remove(&row.id);
                let contacts = contacts_by_owner.remove(&row.id).unwrap_or_default();
                row.into_domain(address, contacts)
            })
            .collect()
    }
}

async fn insert_address(
    conn: &mut PgConnection,
    professional_id: i64,
    address: Address,
) -> Result<AddressDbModel, sqlx::Error> {
    sqlx::query_as::<_, AddressDbModel>(&format!(
        r#"
        INSERT INTO addresses (professional_id, street, number, neighborhood, complement, city, state, zip_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {}
        "#,
        ADDRESS_COLUMNS
    ))
    .bind(professional_id)
    .bind(address.street)
    .bind(address.number)
    .bind(address.neighborhood)
    .bind(address.complement)
    .bind(address.city)
    .bind(address.state)
    .bind(address.zip_code)
    .fetch_one(&mut *conn)
    .await
}

async fn insert_contacts(
    conn: &mut PgConnection,
    professional_id: i64,
    contacts: Vec<Contact>,
) -> Result<Vec<ContactDbModel>, sqlx::Error> {
    if contacts.is_empty() {
        return Ok(Vec::new());
    }

    let mut query_builder =
        sqlx::QueryBuilder::new("INSERT INTO contacts (professional_id, kind, value) ");

    query_builder.push_values(contacts, |mut b, contact| {
        b.push_bind(professional_id)
            .push_bind(contact.kind.as_str())
            .push_bind(contact.value);
    });
    query_builder.push(" RETURNING ");
    query_builder.push(CONTACT_COLUMNS);

    let mut rows = query_builder
        .build_query_as::<ContactDbModel>()
        .fetch_all(&mut *conn)
        .await?;

    // Same order as reads
    rows.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)));
    Ok(rows)
}

#[async_trait]
impl ProfessionalRepository for PostgresProfessionalRepository {
    #[tracing::instrument(skip(self, data))]
    async fn create(&self, data: ProfessionalData) -> Result<Professional, anyhow::Error> {
        // Dropping the transaction on an early return rolls everything back.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProfessionalDbModel>(&format!(
            r#"
            INSERT INTO professionals (uuid, social_name, profession)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            PROFESSIONAL_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(data.social_name)
        .bind(data.profession)
        .fetch_one(&mut *tx)
        .await?;

        let address = insert_address(&mut tx, row.id, data.address).await?;
        let contacts = insert_contacts(&mut tx, row.id, data.contacts).await?;

        tx.commit().await?;

        row.into_domain(Some(address), contacts)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Professional>, anyhow::Error> {
        let row = sqlx::query_as::<_, ProfessionalDbModel>(&format!(
            "SELECT {} FROM professionals WHERE uuid = $1",
            PROFESSIONAL_COLUMNS
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.with_children(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self, ids))]
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Professional>, anyhow::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ProfessionalDbModel>(&format!(
            "SELECT {} FROM professionals WHERE id = ANY($1) ORDER BY social_name, id",
            PROFESSIONAL_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        self.with_children(rows).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Professional>, anyhow::Error> {
        let rows = sqlx::query_as::<_, ProfessionalDbModel>(&format!(
            r#"
            SELECT {}
            FROM professionals
            ORDER BY social_name, id
            LIMIT $1 OFFSET $2
            "#,
            PROFESSIONAL_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        self.with_children(rows).await
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<i64, anyhow::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM professionals")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    #[tracing::instrument(skip(self, data))]
    async fn update(
        &self,
        id: i64,
        data: ProfessionalData,
    ) -> Result<Option<Professional>, anyhow::Error> {
        let mut tx = self.pool.begin().await?;

        // The UPDATE holds the row lock until commit, so concurrent replaces
        // of the same professional run one after the other.
        let row = sqlx::query_as::<_, ProfessionalDbModel>(&format!(
            r#"
            UPDATE professionals
            SET social_name = $1, profession = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING {}
            "#,
            PROFESSIONAL_COLUMNS
        ))
        .bind(data.social_name)
        .bind(data.profession)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM addresses WHERE professional_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let address = insert_address(&mut tx, id, data.address).await?;

        sqlx::query("DELETE FROM contacts WHERE professional_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let contacts = insert_contacts(&mut tx, id, data.contacts).await?;

        tx.commit().await?;

        row.into_domain(Some(address), contacts).map(Some)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error> {
        // Addresses, contacts and appointments go with it (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM professionals WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
