use crate::domain::appointments::Appointment;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Appointment row joined with its professional's external identifier.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentDbModel {
    pub id: i64,
    pub uuid: Uuid,
    pub date: OffsetDateTime,
    pub professional_id: i64,
    pub professional_uuid: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<AppointmentDbModel> for Appointment {
    fn from(model: AppointmentDbModel) -> Self {
        Self {
            id: model.id,
            uuid: model.uuid,
            date: model.date,
            professional_id: model.professional_id,
            professional_uuid: model.professional_uuid,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
