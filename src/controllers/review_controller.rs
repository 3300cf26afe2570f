use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct ReviewController {
    repository: ReviewRepository,
    customers: CustomerRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReviewRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateReviewRequest) -> Result<ReviewResponse, AppError> {
        request.validate()?;

        if !self.customers.exists(request.customer_id).await? {
            return Err(AppError::BadRequest(format!(
                "El cliente con id '{}' no existe",
                request.customer_id
            )));
        }

        let review = self
            .repository
            .create(
                request.rating,
                request.content.trim().to_string(),
                request.customer_id,
            )
            .await?;

        Ok(review.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ReviewResponse, AppError> {
        let review = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reseña", id))?;

        Ok(review.into())
    }

    pub async fn list(&self) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.repository.find_all().await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateReviewRequest,
    ) -> Result<ReviewResponse, AppError> {
        request.validate()?;

        let review = self
            .repository
            .update(id, request.rating, request.content)
            .await?;

        Ok(review.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
