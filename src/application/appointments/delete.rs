use crate::domain::appointments::AppointmentRepository;
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct DeleteAppointmentUseCase {
    repo: Arc<dyn AppointmentRepository>,
}

impl DeleteAppointmentUseCase {
    pub fn new(repo: Arc<dyn AppointmentRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, uuid: Uuid) -> Result<(), AppError> {
        if self.repo.delete(uuid).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
