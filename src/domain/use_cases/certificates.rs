use std::sync::Arc;

use crate::{
    entities::certificate::{
        Certificate, CertificateChanges, CertificateFilter, CertificateInsert, NewCertificateRequest,
        UpdateCertificateRequest,
    },
    errors::AppError,
    repositories::certificate::CertificateRepository,
};

const NOT_FOUND: &str = "Certificate not found";

pub struct CertificateHandler {
    pub certificate_repo: Arc<dyn CertificateRepository>,
}

impl CertificateHandler {
    pub fn new(certificate_repo: Arc<dyn CertificateRepository>) -> Self {
        CertificateHandler { certificate_repo }
    }

    pub async fn list_certificates(&self, filter: &CertificateFilter) -> Result<Vec<Certificate>, AppError> {
        self.certificate_repo.list_certificates(filter).await
    }

    pub async fn get_certificate(&self, id: i64) -> Result<Certificate, AppError> {
        self.certificate_repo
            .get_certificate_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    pub async fn create_certificate(&self, request: NewCertificateRequest) -> Result<Certificate, AppError> {
        let insert = CertificateInsert::try_from(request)?;
        let certificate = self.certificate_repo.create_certificate(&insert).await?;

        tracing::info!(certificate_id = certificate.id, "Certificate created");
        Ok(certificate)
    }

    pub async fn update_certificate(
        &self,
        id: i64,
        request: UpdateCertificateRequest,
    ) -> Result<Certificate, AppError> {
        let changes = CertificateChanges::try_from(request)?;

        self.certificate_repo
            .update_certificate(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    pub async fn delete_certificate(&self, id: i64) -> Result<(), AppError> {
        if !self.certificate_repo.delete_certificate(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }

        tracing::info!(certificate_id = id, "Certificate deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    use crate::{entities::option_fields::OptionField, repositories::certificate::MockCertificateRepository};

    fn stored(id: i64, insert: &CertificateInsert) -> Certificate {
        let now = Utc::now();
        Certificate {
            id,
            nome: insert.nome.clone(),
            instituicao: insert.instituicao.clone(),
            origem: insert.origem.clone(),
            data_conclusao: insert.data_conclusao,
            link_certificado: insert.link_certificado.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_rt::test]
    async fn filter_is_forwarded_to_the_gateway() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_list_certificates()
            .withf(|filter| filter.origem() == Some("Alura"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let handler = CertificateHandler::new(Arc::new(repo));
        let filter = CertificateFilter { origem: Some("Alura".into()) };
        assert!(handler.list_certificates(&filter).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn create_stores_parsed_date() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_create_certificate()
            .withf(|insert| insert.data_conclusao == NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .times(1)
            .returning(|insert| Ok(stored(5, insert)));

        let handler = CertificateHandler::new(Arc::new(repo));
        let request = NewCertificateRequest {
            nome: Some("Rust".into()),
            instituicao: Some("Alura".into()),
            data_conclusao: Some("2024-02-29".into()),
            ..Default::default()
        };

        assert_eq!(handler.create_certificate(request).await.unwrap().id, 5);
    }

    #[actix_rt::test]
    async fn impossible_date_is_rejected_without_insert() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_create_certificate().never();

        let handler = CertificateHandler::new(Arc::new(repo));
        let request = NewCertificateRequest {
            nome: Some("Rust".into()),
            instituicao: Some("Alura".into()),
            data_conclusao: Some("2025-02-30".into()),
            ..Default::default()
        };

        let err = handler.create_certificate(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref e) if e.field == "data_conclusao"));
    }

    #[actix_rt::test]
    async fn clearing_link_reaches_the_gateway_as_null() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_update_certificate()
            .withf(|id, changes| *id == 2 && changes.link_certificado == OptionField::SetToNull)
            .returning(|_, _| Ok(None));

        let handler = CertificateHandler::new(Arc::new(repo));
        let request = UpdateCertificateRequest { link_certificado: OptionField::SetToNull, ..Default::default() };

        let err = handler.update_certificate(2, request).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Certificate not found"));
    }

    #[actix_rt::test]
    async fn delete_of_unknown_id_is_not_found() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_delete_certificate().returning(|_| Ok(false));

        let handler = CertificateHandler::new(Arc::new(repo));
        assert!(matches!(handler.delete_certificate(9).await, Err(AppError::NotFound(_))));
    }
}
