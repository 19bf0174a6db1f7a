use super::get::with_professionals;
use crate::domain::appointments::{AppointmentDetail, AppointmentRepository};
use crate::domain::professionals::ProfessionalRepository;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use std::sync::Arc;
use uuid::Uuid;

/// Exact-match filter on the owning professional's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessionalFilter {
    Any,
    Professional(Uuid),
    /// A value that can match no row, such as a malformed identifier.
    Unmatchable,
}

impl ProfessionalFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => ProfessionalFilter::Any,
            Some(value) => Uuid::parse_str(value)
                .map(ProfessionalFilter::Professional)
                .unwrap_or(ProfessionalFilter::Unmatchable),
        }
    }
}

pub struct ListAppointmentsUseCase {
    repo: Arc<dyn AppointmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
    page_size: i64,
}

impl ListAppointmentsUseCase {
    pub fn new(
        repo: Arc<dyn AppointmentRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
        page_size: i64,
    ) -> Self {
        Self {
            repo,
            professionals,
            page_size,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        filter: ProfessionalFilter,
        page: Option<&str>,
    ) -> Result<Page<AppointmentDetail>, AppError> {
        let professional_uuid = match filter {
            ProfessionalFilter::Any => None,
            ProfessionalFilter::Professional(uuid) => Some(uuid),
            ProfessionalFilter::Unmatchable => {
                let request = PageRequest::resolve(page, self.page_size, 0)?;
                return Ok(Page::new(Vec::new(), 0, request));
            }
        };

        let total = self.repo.count(professional_uuid).await?;
        let request = PageRequest::resolve(page, self.page_size, total)?;
        let appointments = self
            .repo
            .find_all(professional_uuid, request.limit(), request.offset())
            .await?;
        let items = with_professionals(self.professionals.as_ref(), appointments).await?;

        Ok(Page::new(items, total, request))
    }
}
