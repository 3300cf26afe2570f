use crate::models::booking::Booking;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una nueva reserva
///
/// El formulario de la consola no envía fecha: cuando falta, la reserva
/// queda programada para el momento de creación.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub date: Option<DateTime<Utc>>,

    pub status: String,

    #[validate(range(min = 1, message = "El id de cliente no es válido"))]
    pub customer_id: i64,

    #[validate(range(min = 1, message = "El id de ciudad no es válido"))]
    pub city_id: i64,

    #[validate(range(min = 1, message = "El id de servicio no es válido"))]
    pub service_id: i64,

    #[validate(range(min = 1, message = "El id de vehículo no es válido"))]
    pub vehicle_id: i64,
}

/// Request para actualizar una reserva existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub date: Option<DateTime<Utc>>,

    pub status: Option<String>,

    #[validate(range(min = 1, message = "El id de cliente no es válido"))]
    pub customer_id: Option<i64>,

    #[validate(range(min = 1, message = "El id de ciudad no es válido"))]
    pub city_id: Option<i64>,

    #[validate(range(min = 1, message = "El id de servicio no es válido"))]
    pub service_id: Option<i64>,

    #[validate(range(min = 1, message = "El id de vehículo no es válido"))]
    pub vehicle_id: Option<i64>,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub status: String,
    pub customer_id: i64,
    pub city_id: i64,
    pub service_id: i64,
    pub vehicle_id: i64,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            date: booking.scheduled_at,
            status: booking.status,
            customer_id: booking.customer_id,
            city_id: booking.city_id,
            service_id: booking.service_id,
            vehicle_id: booking.vehicle_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_matches_console_payload() {
        // Payload exacto del formulario de reservas de la consola
        let request: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "status": "confirmed",
            "customerId": 1,
            "cityId": 2,
            "serviceId": 3,
            "vehicleId": 4
        }))
        .unwrap();

        assert!(request.date.is_none());
        assert_eq!(request.status, "confirmed");
        assert_eq!(request.vehicle_id, 4);
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = BookingResponse::from(Booking {
            id: 9,
            scheduled_at: Utc.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap(),
            status: "pending".to_string(),
            customer_id: 1,
            city_id: 2,
            service_id: 3,
            vehicle_id: 4,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("date").is_some());
        assert!(value.get("scheduledAt").is_none());
        assert_eq!(value["cityId"], 2);
        assert_eq!(value["serviceId"], 3);
    }
}
