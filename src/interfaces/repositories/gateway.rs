use async_trait::async_trait;
use sqlx::{self, PgPool};

use crate::{errors::AppError, repositories::sqlx_repo::SqlxGateway};

/// Reachability of the database as a whole, independent of any table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GatewayRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxGateway {
    pub fn new(pool: PgPool) -> Self {
        SqlxGateway { pool }
    }
}

#[async_trait]
impl GatewayRepository for SqlxGateway {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
