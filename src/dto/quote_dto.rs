use crate::models::quote::Quote;
use crate::utils::validation::PHONE_RE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request del diálogo "Pedir presupuesto" de la landing
///
/// `plate` y `comment` llegan como cadena vacía cuando el usuario no los
/// rellena; se normalizan a NULL antes de persistir.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: String,

    #[validate(regex(path = "PHONE_RE", message = "El teléfono no es válido"))]
    pub phone: String,

    pub plate: Option<String>,

    pub comment: Option<String>,
}

/// Response de solicitud de presupuesto para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub plate: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            name: quote.name,
            phone: quote.phone,
            plate: quote.plate,
            comment: quote.comment,
            created_at: quote.created_at,
        }
    }
}
