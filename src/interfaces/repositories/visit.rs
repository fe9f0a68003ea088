use async_trait::async_trait;
use sqlx::{self, PgPool};

use crate::{
    entities::visit::VISIT_COUNTER_ID,
    errors::AppError,
    repositories::sqlx_repo::SqlxVisitRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Current total, `0` when the counter row was never created.
    async fn get_total(&self) -> Result<i64, AppError>;
    /// Adds one in a single statement and returns the new total.
    async fn increment(&self) -> Result<i64, AppError>;
}

impl SqlxVisitRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxVisitRepo { pool }
    }
}

#[async_trait]
impl VisitRepository for SqlxVisitRepo {
    async fn get_total(&self) -> Result<i64, AppError> {
        let total: Option<i64> = sqlx::query_scalar("SELECT total FROM visitas WHERE id = $1")
            .bind(VISIT_COUNTER_ID)
            .fetch_optional(&self.pool)
            .await?;

        Ok(total.unwrap_or(0))
    }

    async fn increment(&self) -> Result<i64, AppError> {
        // Row-level upsert keeps concurrent increments from losing updates.
        let total: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO visitas (id, total, updated_at)
            VALUES ($1, 1, NOW())
            ON CONFLICT (id) DO UPDATE
                SET total = visitas.total + 1,
                    updated_at = NOW()
            RETURNING total
            "#,
        )
        .bind(VISIT_COUNTER_ID)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
