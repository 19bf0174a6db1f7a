use crate::domain::appointments::{
    Appointment, AppointmentRepository, NewAppointment, UpdateAppointment,
};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::appointments::AppointmentDbModel;
use async_trait::async_trait;
use uuid::Uuid;

const SELECT_APPOINTMENT: &str = r#"
    SELECT a.id, a.uuid, a.date, a.professional_id, p.uuid AS professional_uuid,
           a.created_at, a.updated_at
    FROM appointments a
    JOIN professionals p ON p.id = a.professional_id
"#;

#[derive(Clone)]
pub struct PostgresAppointmentRepository {
    pool: DbPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    #[tracing::instrument(skip(self))]
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, anyhow::Error> {
        let row = sqlx::query_as::<_, AppointmentDbModel>(
            r#"
            WITH inserted AS (
                INSERT INTO appointments (uuid, date, professional_id)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT i.id, i.uuid, i.date, i.professional_id, p.uuid AS professional_uuid,
                   i.created_at, i.updated_at
            FROM inserted i
            JOIN professionals p ON p.id = i.professional_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_appointment.date)
        .bind(new_appointment.professional_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Appointment>, anyhow::Error> {
        let row = sqlx::query_as::<_, AppointmentDbModel>(&format!(
            "{} WHERE a.uuid = $1",
            SELECT_APPOINTMENT
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Appointment::from))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(
        &self,
        professional_uuid: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Appointment>, anyhow::Error> {
        let rows = sqlx::query_as::<_, AppointmentDbModel>(&format!(
            r#"
            {}
            WHERE ($1::uuid IS NULL OR p.uuid = $1)
            ORDER BY a.date DESC, a.id DESC
            LIMIT $2 OFFSET $3
            "#,
            SELECT_APPOINTMENT
        ))
        .bind(professional_uuid)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self, professional_uuid: Option<Uuid>) -> Result<i64, anyhow::Error> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM appointments a
            JOIN professionals p ON p.id = a.professional_id
            WHERE ($1::uuid IS NULL OR p.uuid = $1)
            "#,
        )
        .bind(professional_uuid)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    #[tracing::instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        update: UpdateAppointment,
    ) -> Result<Option<Appointment>, anyhow::Error> {
        let row = sqlx::query_as::<_, AppointmentDbModel>(
            r#"
            WITH updated AS (
                UPDATE appointments
                SET date = COALESCE($1, date),
                    professional_id = COALESCE($2, professional_id),
                    updated_at = NOW()
                WHERE id = $3
                RETURNING *
            )
            SELECT u.id, u.uuid, u.date, u.professional_id, p.uuid AS professional_uuid,
                   u.created_at, u.updated_at
            FROM updated u
            JOIN professionals p ON p.id = u.professional_id
            "#,
        )
        .bind(update.date)
        .bind(update.professional_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Appointment::from))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
