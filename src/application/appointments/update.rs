use super::payload::{AppointmentPatchRequest, AppointmentRequest, date_of, resolve_professional};
use crate::domain::appointments::{Appointment, AppointmentRepository, UpdateAppointment};
use crate::domain::professionals::ProfessionalRepository;
use crate::shared::error::AppError;
use crate::shared::validation::collect;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Updates an appointment. A full update is a partial one whose fields were
/// all required to be present.
pub struct UpdateAppointmentUseCase {
    repo: Arc<dyn AppointmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
}

impl UpdateAppointmentUseCase {
    pub fn new(
        repo: Arc<dyn AppointmentRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
    ) -> Self {
        Self {
            repo,
            professionals,
        }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn replace(&self, uuid: Uuid, req: AppointmentRequest) -> Result<Appointment, AppError> {
        let existing = self.find(uuid).await?;

        let mut errors = collect(req.validate());
        let professional = resolve_professional(
            self.professionals.as_ref(),
            req.professional_uuid.as_ref(),
            &mut errors,
        )
        .await?;

        let update = match (req.date.as_ref().and_then(date_of), professional) {
            (Some(date), Some(professional)) if errors.is_empty() => UpdateAppointment {
                date: Some(date),
                professional_id: Some(professional.id),
            },
            _ => return Err(AppError::Validation(errors)),
        };
        self.apply(existing.id, update).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn patch(
        &self,
        uuid: Uuid,
        req: AppointmentPatchRequest,
    ) -> Result<Appointment, AppError> {
        let existing = self.find(uuid).await?;

        let mut errors = collect(req.validate());
        let professional = resolve_professional(
            self.professionals.as_ref(),
            req.professional_uuid.as_ref(),
            &mut errors,
        )
        .await?;
        errors.into_result()?;

        let update = UpdateAppointment {
            date: req.date.as_ref().and_then(date_of),
            professional_id: professional.map(|p| p.id),
        };
        self.apply(existing.id, update).await
    }

    async fn find(&self, uuid: Uuid) -> Result<Appointment, AppError> {
        self.repo
            .find_by_uuid(uuid)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn apply(&self, id: i64, update: UpdateAppointment) -> Result<Appointment, AppError> {
        self.repo
            .update(id, update)
            .await?
            .ok_or(AppError::NotFound)
    }
}
