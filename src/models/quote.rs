//! Modelo de Quote
//!
//! Mapea exactamente a la tabla `quotes`: solicitudes de presupuesto que
//! llegan desde el diálogo de la landing. Matrícula y comentario son
//! opcionales y se guardan como NULL cuando llegan en blanco.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Solicitud de presupuesto
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quote {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub plate: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
