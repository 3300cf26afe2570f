//! Modelo de Review
//!
//! Mapea exactamente a la tabla `reviews`. La puntuación va de 1 a 5
//! (CHECK en el schema).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reseña dejada por un cliente
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub rating: i32,
    pub content: String,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}
