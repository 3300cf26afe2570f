//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles` con primary key 'id'.
//! Cada vehículo pertenece a un cliente registrado.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo de un cliente
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub customer_id: i64,
}
