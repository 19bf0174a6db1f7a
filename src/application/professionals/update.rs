use super::payload::ProfessionalPayload;
use crate::domain::professionals::{Professional, ProfessionalRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Full replace of a professional, used by both PUT and PATCH.
pub struct UpdateProfessionalUseCase {
    repo: Arc<dyn ProfessionalRepository>,
}

impl UpdateProfessionalUseCase {
    pub fn new(repo: Arc<dyn ProfessionalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        uuid: Uuid,
        payload: ProfessionalPayload,
    ) -> Result<Professional, AppError> {
        let existing = self
            .repo
            .find_by_uuid(uuid)
            .await?
            .ok_or(AppError::NotFound)?;

        let data = payload.into_data()?;

        self.repo
            .update(existing.id, data)
            .await?
            .ok_or(AppError::NotFound)
    }
}
