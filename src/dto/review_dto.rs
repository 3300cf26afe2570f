use crate::models::review::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una nueva reseña
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "La puntuación debe estar entre 1 y 5"))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000, message = "El contenido es requerido"))]
    pub content: String,

    #[validate(range(min = 1, message = "El id de cliente no es válido"))]
    pub customer_id: i64,
}

/// Request para actualizar una reseña existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "La puntuación debe estar entre 1 y 5"))]
    pub rating: Option<i32>,

    #[validate(length(min = 1, max = 2000, message = "El contenido es requerido"))]
    pub content: Option<String>,
}

/// Response de reseña para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub rating: i32,
    pub content: String,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            content: review.content,
            customer_id: review.customer_id,
            created_at: review.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        for rating in [0, 6, -1] {
            let request = CreateReviewRequest {
                rating,
                content: "Muy buen servicio".to_string(),
                customer_id: 1,
            };
            assert!(request.validate().is_err(), "rating {} debería fallar", rating);
        }
    }
}
