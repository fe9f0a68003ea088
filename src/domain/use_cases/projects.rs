use std::sync::Arc;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectChanges, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

const NOT_FOUND: &str = "Project not found";

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo
            .get_project_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    /// Validates then inserts; nothing is written when validation fails
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;
        let project = self.project_repo.create_project(&insert).await?;

        tracing::info!(project_id = project.id, "Project created");
        Ok(project)
    }

    /// Applies only the supplied fields
    pub async fn update_project(&self, id: i64, request: UpdateProjectRequest) -> Result<Project, AppError> {
        let changes = ProjectChanges::try_from(request)?;

        self.project_repo
            .update_project(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        if !self.project_repo.delete_project(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }

        tracing::info!(project_id = id, "Project deleted");
        Ok(())
    }
}
