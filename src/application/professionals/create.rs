use super::payload::ProfessionalPayload;
use crate::domain::professionals::{Professional, ProfessionalRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct CreateProfessionalUseCase {
    repo: Arc<dyn ProfessionalRepository>,
}

impl CreateProfessionalUseCase {
    pub fn new(repo: Arc<dyn ProfessionalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: ProfessionalPayload) -> Result<Professional, AppError> {
        let data = payload.into_data()?;
        Ok(self.repo.create(data).await?)
    }
}
