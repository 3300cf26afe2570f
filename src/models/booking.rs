//! Modelo de Booking
//!
//! Mapea exactamente a la tabla `bookings`. El estado se guarda como texto
//! y se valida contra [`BookingStatus`] antes de cualquier escritura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Representación en texto, tal y como viaja por la API y se persiste
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parsear el estado recibido de la consola
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Estados válidos, para mensajes de error
    pub fn allowed() -> &'static [&'static str] {
        &["pending", "confirmed", "cancelled"]
    }
}

/// Reserva de un servicio para un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
    pub customer_id: i64,
    pub city_id: i64,
    pub service_id: i64,
    pub vehicle_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::parse("confirmed"), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("cancelled"), Some(BookingStatus::Cancelled));
        assert_eq!(BookingStatus::parse("Confirmed"), None);
        assert_eq!(BookingStatus::parse(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in ["pending", "confirmed", "cancelled"] {
            assert_eq!(BookingStatus::parse(status).unwrap().as_str(), status);
        }
    }
}
