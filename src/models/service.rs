//! Modelo de Service
//!
//! Mapea exactamente a la tabla `services`. El precio se guarda como
//! NUMERIC(10,2) y la duración en minutos.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Servicio ofrecido por el taller (reparación, sustitución, calibración...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
}
