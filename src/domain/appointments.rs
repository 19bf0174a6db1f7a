use super::professionals::Professional;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: i64,
    pub uuid: Uuid,
    pub date: OffsetDateTime,
    pub professional_id: i64,
    pub professional_uuid: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// An appointment with its professional loaded.
#[derive(Debug, Clone)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub professional: Professional,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub date: OffsetDateTime,
    pub professional_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAppointment {
    pub date: Option<OffsetDateTime>,
    pub professional_id: Option<i64>,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, anyhow::Error>;
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Appointment>, anyhow::Error>;
    /// Newest date first, optionally restricted to one professional.
    async fn find_all(
        &self,
        professional_uuid: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Appointment>, anyhow::Error>;
    async fn count(&self, professional_uuid: Option<Uuid>) -> Result<i64, anyhow::Error>;
    async fn update(
        &self,
        id: i64,
        update: UpdateAppointment,
    ) -> Result<Option<Appointment>, anyhow::Error>;
    async fn delete(&self, uuid: Uuid) -> Result<bool, anyhow::Error>;
}
