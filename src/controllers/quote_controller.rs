use crate::dto::quote_dto::{CreateQuoteRequest, QuoteResponse};
use crate::repositories::quote_repository::QuoteRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_optional;
use sqlx::PgPool;
use validator::Validate;

pub struct QuoteController {
    repository: QuoteRepository,
}

impl QuoteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: QuoteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateQuoteRequest) -> Result<QuoteResponse, AppError> {
        request.validate()?;

        let quote = self
            .repository
            .create(
                request.name.trim().to_string(),
                request.phone.trim().to_string(),
                normalize_optional(request.plate),
                normalize_optional(request.comment),
            )
            .await?;

        Ok(quote.into())
    }

    pub async fn list(&self) -> Result<Vec<QuoteResponse>, AppError> {
        let quotes = self.repository.find_all().await?;

        Ok(quotes.into_iter().map(QuoteResponse::from).collect())
    }
}
