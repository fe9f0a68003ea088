use std::sync::Arc;

use crate::{entities::visit::VisitCount, errors::AppError, repositories::visit::VisitRepository};

pub struct VisitHandler {
    pub visit_repo: Arc<dyn VisitRepository>,
}

impl VisitHandler {
    pub fn new(visit_repo: Arc<dyn VisitRepository>) -> Self {
        VisitHandler { visit_repo }
    }

    pub async fn current(&self) -> Result<VisitCount, AppError> {
        let total = self.visit_repo.get_total().await?;
        Ok(VisitCount { total })
    }

    pub async fn record_visit(&self) -> Result<VisitCount, AppError> {
        let total = self.visit_repo.increment().await?;
        tracing::debug!(total, "Visit recorded");
        Ok(VisitCount { total })
    }
}
