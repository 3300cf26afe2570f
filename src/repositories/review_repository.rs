use crate::models::review::Review;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        rating: i32,
        content: String,
        customer_id: i64,
    ) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (rating, content, customer_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(rating)
        .bind(content)
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(review)
    }

    pub async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        let reviews =
            sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(reviews)
    }

    pub async fn update(
        &self,
        id: i64,
        rating: Option<i32>,
        content: Option<String>,
    ) -> Result<Review, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reseña", id))?;

        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET rating = $2, content = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(rating.unwrap_or(current.rating))
        .bind(content.unwrap_or(current.content))
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Reseña", id));
        }

        Ok(())
    }
}
