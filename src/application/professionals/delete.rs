use crate::domain::professionals::ProfessionalRepository;
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct DeleteProfessionalUseCase {
    repo: Arc<dyn ProfessionalRepository>,
}

impl DeleteProfessionalUseCase {
    pub fn new(repo: Arc<dyn ProfessionalRepository>) -> Self {
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
