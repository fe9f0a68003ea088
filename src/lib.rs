use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases, validation};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, db};

use auth::guard::AdminGuard;
use errors::AppError;
use repositories::gateway::GatewayRepository;
use shared_repos::SharedRepositories;
use use_cases::{certificates::CertificateHandler, projects::ProjectHandler, visits::VisitHandler};

pub struct AppState {
    pub project_handler: ProjectHandler,
    pub certificate_handler: CertificateHandler,
    pub visit_handler: VisitHandler,
    pub guard: AdminGuard,
    gateway_repo: Arc<dyn GatewayRepository>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        Self::from_repositories(config, SharedRepositories::new(pool))
    }

    /// Builds the state over any repository implementation.
    pub fn from_repositories(config: &settings::AppConfig, repos: SharedRepositories) -> Self {
        AppState {
            project_handler: ProjectHandler::new(repos.project_repo),
            certificate_handler: CertificateHandler::new(repos.certificate_repo),
            visit_handler: VisitHandler::new(repos.visit_repo),
            guard: AdminGuard::new(config),
            gateway_repo: repos.gateway_repo,
        }
    }

    /// `Ok` when the database answers a trivial query.
    pub async fn check_gateway(&self) -> Result<(), AppError> {
        self.gateway_repo.check_connection().await
    }
}
