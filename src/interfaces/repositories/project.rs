use async_trait::async_trait;
use sqlx::{self, PgPool, Postgres, QueryBuilder};

use crate::{
    entities::project::{Project, ProjectChanges, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::{push_nullable, SqlxProjectRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    /// `None` when no row has the id.
    async fn update_project(&self, id: i64, changes: &ProjectChanges) -> Result<Option<Project>, AppError>;
    /// `false` when no row has the id.
    async fn delete_project(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projetos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projetos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projetos (titulo, descricao, tecnologias, link_github, link_deploy)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&project.titulo)
        .bind(&project.descricao)
        .bind(&project.tecnologias)
        .bind(&project.link_github)
        .bind(&project.link_deploy)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(&self, id: i64, changes: &ProjectChanges) -> Result<Option<Project>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE projetos SET updated_at = NOW()");

        if let Some(titulo) = &changes.titulo {
            builder.push(", titulo = ").push_bind(titulo.clone());
        }
        if let Some(descricao) = &changes.descricao {
            builder.push(", descricao = ").push_bind(descricao.clone());
        }
        if let Some(tecnologias) = &changes.tecnologias {
            builder.push(", tecnologias = ").push_bind(tecnologias.clone());
        }
        push_nullable(&mut builder, "link_github", &changes.link_github);
        push_nullable(&mut builder, "link_deploy", &changes.link_deploy);

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Project>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
