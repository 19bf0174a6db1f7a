use super::payload::{AppointmentRequest, date_of, resolve_professional};
use crate::domain::appointments::{Appointment, AppointmentRepository, NewAppointment};
use crate::domain::professionals::ProfessionalRepository;
use crate::shared::error::AppError;
use crate::shared::validation::collect;
use std::sync::Arc;
use validator::Validate;

pub struct CreateAppointmentUseCase {
    repo: Arc<dyn AppointmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
}

impl CreateAppointmentUseCase {
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
    pub async fn execute(&self, req: AppointmentRequest) -> Result<Appointment, AppError> {
        let mut errors = collect(req.validate());
        let professional = resolve_professional(
            self.professionals.as_ref(),
            req.professional_uuid.as_ref(),
            &mut errors,
        )
        .await?;

        let new_appointment = match (req.date.as_ref().and_then(date_of), professional) {
            (Some(date), Some(professional)) if errors.is_empty() => NewAppointment {
                date,
                professional_id: professional.id,
            },
            _ => return Err(AppError::Validation(errors)),
        };

        Ok(self.repo.create(new_appointment).await?)
    }
}
