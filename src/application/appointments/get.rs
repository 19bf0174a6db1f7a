use crate::domain::appointments::{Appointment, AppointmentDetail, AppointmentRepository};
use crate::domain::professionals::ProfessionalRepository;
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct GetAppointmentUseCase {
    repo: Arc<dyn AppointmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
}

impl GetAppointmentUseCase {
    pub fn new(
        repo: Arc<dyn AppointmentRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
    ) -> Self {
        Self {
            repo,
            professionals,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, uuid: Uuid) -> Result<AppointmentDetail, AppError> {
        let appointment = self
            .repo
            .find_by_uuid(uuid)
            .await?
            .ok_or(AppError::NotFound)?;

        with_professionals(self.professionals.as_ref(), vec![appointment])
            .await?
            .pop()
            .ok_or(AppError::NotFound)
    }
}

/// Attaches each appointment's professional with one batched lookup.
/// Appointments whose professional vanished meanwhile are dropped.
pub(super) async fn with_professionals(
    professionals: &dyn ProfessionalRepository,
    appointments: Vec<Appointment>,
) -> Result<Vec<AppointmentDetail>, AppError> {
    let mut ids: Vec<i64> = appointments.iter().map(|a| a.professional_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let by_id: HashMap<i64, _> = professionals
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(appointments
        .into_iter()
        .filter_map(|appointment| {
            let professional = by_id.get(&appointment.professional_id)?.clone();
            Some(AppointmentDetail {
                appointment,
                professional,
            })
        })
        .collect())
}
