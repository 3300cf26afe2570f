//! Modelo de City
//!
//! Mapea exactamente a la tabla `cities`. El nombre es único.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ciudad donde opera el taller
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
}
