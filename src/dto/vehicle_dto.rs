use crate::models::vehicle::Vehicle;
use crate::utils::validation::PLATE_RE;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(regex(path = "PLATE_RE", message = "La matrícula no es válida"))]
    pub plate: String,

    #[validate(length(min = 1, max = 60, message = "La marca es requerida"))]
    pub brand: String,

    #[validate(length(min = 1, max = 60, message = "El modelo es requerido"))]
    pub model: String,

    #[validate(range(min = 1, message = "El id de cliente no es válido"))]
    pub customer_id: i64,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(regex(path = "PLATE_RE", message = "La matrícula no es válida"))]
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 60, message = "La marca es requerida"))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 60, message = "El modelo es requerido"))]
    pub model: Option<String>,

    #[validate(range(min = 1, message = "El id de cliente no es válido"))]
    pub customer_id: Option<i64>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub customer_id: i64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            brand: vehicle.brand,
            model: vehicle.model,
            customer_id: vehicle.customer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case() {
        let response = VehicleResponse::from(Vehicle {
            id: 3,
            plate: "1234 BCD".to_string(),
            brand: "Seat".to_string(),
            model: "León".to_string(),
            customer_id: 7,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["customerId"], 7);
        assert!(value.get("customer_id").is_none());
    }

    #[test]
    fn test_create_request_accepts_camel_case() {
        let request: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "plate": "1234 BCD",
            "brand": "Seat",
            "model": "León",
            "customerId": 7
        }))
        .unwrap();

        assert_eq!(request.customer_id, 7);
        assert!(request.validate().is_ok());
    }
}
