use async_trait::async_trait;
use sqlx::{self, PgPool, Postgres, QueryBuilder};

use crate::{
    entities::certificate::{Certificate, CertificateChanges, CertificateFilter, CertificateInsert},
    errors::AppError,
    repositories::sqlx_repo::{push_nullable, SqlxCertificateRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn list_certificates(&self, filter: &CertificateFilter) -> Result<Vec<Certificate>, AppError>;
    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>, AppError>;
    async fn create_certificate(&self, certificate: &CertificateInsert) -> Result<Certificate, AppError>;
    async fn update_certificate(&self, id: i64, changes: &CertificateChanges) -> Result<Option<Certificate>, AppError>;
    async fn delete_certificate(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxCertificateRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxCertificateRepo { pool }
    }
}

#[async_trait]
impl CertificateRepository for SqlxCertificateRepo {
    async fn list_certificates(&self, filter: &CertificateFilter) -> Result<Vec<Certificate>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM certificados");

        if let Some(origem) = filter.origem() {
            builder.push(" WHERE origem = ").push_bind(origem.to_string());
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let certificates = builder
            .build_query_as::<Certificate>()
            .fetch_all(&self.pool)
            .await?;

        Ok(certificates)
    }

    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>, AppError> {
        let certificate = sqlx::query_as::<_, Certificate>("SELECT * FROM certificados WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(certificate)
    }

    async fn create_certificate(&self, certificate: &CertificateInsert) -> Result<Certificate, AppError> {
        let created = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificados (nome, instituicao, origem, data_conclusao, link_certificado)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&certificate.nome)
        .bind(&certificate.instituicao)
        .bind(&certificate.origem)
        .bind(certificate.data_conclusao)
        .bind(&certificate.link_certificado)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_certificate(&self, id: i64, changes: &CertificateChanges) -> Result<Option<Certificate>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE certificados SET updated_at = NOW()");

        if let Some(nome) = &changes.nome {
            builder.push(", nome = ").push_bind(nome.clone());
        }
        if let Some(instituicao) = &changes.instituicao {
            builder.push(", instituicao = ").push_bind(instituicao.clone());
        }
        if let Some(data_conclusao) = changes.data_conclusao {
            builder.push(", data_conclusao = ").push_bind(data_conclusao);
        }
        push_nullable(&mut builder, "origem", &changes.origem);
        push_nullable(&mut builder, "link_certificado", &changes.link_certificado);

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Certificate>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_certificate(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certificados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
