use crate::domain::professionals::{Professional, ProfessionalRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetProfessionalUseCase {
    repo: Arc<dyn ProfessionalRepository>,
}

impl GetProfessionalUseCase {
    pub fn new(repo: Arc<dyn ProfessionalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, uuid: Uuid) -> Result<Professional, AppError> {
        self.repo.find_by_uuid(uuid).await?.ok_or(AppError::NotFound)
    }
}
