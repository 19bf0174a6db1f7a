use crate::domain::professionals::{Professional, ProfessionalRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use std::sync::Arc;

pub struct ListProfessionalsUseCase {
    repo: Arc<dyn ProfessionalRepository>,
    page_size: i64,
}

impl ListProfessionalsUseCase {
    pub fn new(repo: Arc<dyn ProfessionalRepository>, page_size: i64) -> Self {
        Self { repo, page_size }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, page: Option<&str>) -> Result<Page<Professional>, AppError> {
        let total = self.repo.count().await?;
        let request = PageRequest::resolve(page, self.page_size, total)?;
        let items = self
            .repo
            .find_all(request.limit(), request.offset())
            .await?;

        Ok(Page::new(items, total, request))
    }
}
