//! PostgreSQL implementation of TourRatingRepository

use async_trait::async_trait;
use sqlx::PgPool;

use explorecali::{
    DomainError, PageRequest, Rating, RatingPk, RatingSortField, TourRatingRepository,
};

/// PostgreSQL implementation of TourRatingRepository
pub struct PgTourRatingRepository {
    pool: PgPool,
}

impl PgTourRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RatingRow {
    tour_id: i32,
    customer_id: i32,
    score: Option<i32>,
    comment: Option<String>,
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Self {
            pk: RatingPk::new(row.tour_id, row.customer_id),
            score: row.score,
            comment: row.comment,
        }
    }
}

/// ORDER BY clause for a page. Columns come from a fixed whitelist.
fn order_by(page: &PageRequest) -> String {
    match page.sort {
        Some(sort) if sort.field == RatingSortField::CustomerId => {
            format!("customer_id {}", sort.direction.as_sql())
        }
        Some(sort) => format!(
            "{} {}, customer_id ASC",
            sort.field.column(),
            sort.direction.as_sql()
        ),
        None => "customer_id ASC".to_string(),
    }
}

fn to_sql_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl TourRatingRepository for PgTourRatingRepository {
    async fn find_by_tour_id(&self, tour_id: i32) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            "SELECT * FROM tour_ratings WHERE tour_id = $1 ORDER BY customer_id",
        )
        .bind(tour_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_tour_id_paged(
        &self,
        tour_id: i32,
        page: &PageRequest,
    ) -> Result<Vec<Rating>, DomainError> {
        let sql = format!(
            "SELECT * FROM tour_ratings WHERE tour_id = $1 ORDER BY {} LIMIT $2 OFFSET $3",
            order_by(page)
        );

        let rows = sqlx::query_as::<_, RatingRow>(&sql)
            .bind(tour_id)
            .bind(to_sql_i64(page.limit()))
            .bind(to_sql_i64(page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_tour_id_and_customer_id(
        &self,
        tour_id: i32,
        customer_id: i32,
    ) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query_as::<_, RatingRow>(
            "SELECT * FROM tour_ratings WHERE tour_id = $1 AND customer_id = $2",
        )
        .bind(tour_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, rating: &Rating) -> Result<Rating, DomainError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            INSERT INTO tour_ratings (tour_id, customer_id, score, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(rating.tour_id())
        .bind(rating.customer_id())
        .bind(rating.score)
        .bind(&rating.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::Conflict(format!("rating already exists for {}", rating.pk))
            }
            e => DomainError::Repository(e.to_string()),
        })?;

        Ok(row.into())
    }

    async fn save(&self, rating: &Rating) -> Result<Rating, DomainError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            INSERT INTO tour_ratings (tour_id, customer_id, score, comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tour_id, customer_id)
            DO UPDATE SET score = EXCLUDED.score, comment = EXCLUDED.comment
            RETURNING *
            "#,
        )
        .bind(rating.tour_id())
        .bind(rating.customer_id())
        .bind(rating.score)
        .bind(&rating.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, pk: RatingPk) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM tour_ratings WHERE tour_id = $1 AND customer_id = $2")
                .bind(pk.tour_id)
                .bind(pk.customer_id)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
