use std::sync::Arc;

use crate::repositories::{
    certificate::CertificateRepository,
    gateway::GatewayRepository,
    project::ProjectRepository,
    sqlx_repo::{SqlxCertificateRepo, SqlxGateway, SqlxProjectRepo, SqlxVisitRepo},
    visit::VisitRepository,
};

/// One repository per resource plus the gateway connection check, all sharing one pool.
#[derive(Clone)]
pub struct SharedRepositories {
    pub gateway_repo: Arc<dyn GatewayRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub visit_repo: Arc<dyn VisitRepository>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            gateway_repo: Arc::new(SqlxGateway::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            certificate_repo: Arc::new(SqlxCertificateRepo::new(pool.clone())),
            visit_repo: Arc::new(SqlxVisitRepo::new(pool)),
        }
    }
}
