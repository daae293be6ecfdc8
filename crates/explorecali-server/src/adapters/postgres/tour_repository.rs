//! PostgreSQL implementation of TourRepository

use async_trait::async_trait;
use sqlx::PgPool;

use explorecali::{DomainError, Tour, TourRepository};

/// PostgreSQL implementation of TourRepository
pub struct PgTourRepository {
    pool: PgPool,
}

impl PgTourRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TourRow {
    id: i32,
    title: String,
}

impl From<TourRow> for Tour {
    fn from(row: TourRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[async_trait]
impl TourRepository for PgTourRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DomainError> {
        let row = sqlx::query_as::<_, TourRow>("SELECT id, title FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
