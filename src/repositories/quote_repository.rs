use crate::models::quote::Quote;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        phone: String,
        plate: Option<String>,
        comment: Option<String>,
    ) -> Result<Quote, AppError> {
        let quote = sqlx::query_as::<_, Quote>(
            r#"
            INSERT INTO quotes (name, phone, plate, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(plate)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(quote)
    }

    pub async fn find_all(&self) -> Result<Vec<Quote>, AppError> {
        let quotes = sqlx::query_as::<_, Quote>("SELECT * FROM quotes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(quotes)
    }
}
