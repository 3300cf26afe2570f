use crate::models::service::Service;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear un nuevo servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub price: f64,

    #[validate(range(min = 1, message = "La duración debe ser de al menos un minuto"))]
    pub duration: i32,
}

/// Request para actualizar un servicio existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub price: Option<f64>,

    #[validate(range(min = 1, message = "La duración debe ser de al menos un minuto"))]
    pub duration: Option<i32>,
}

/// Response de servicio para la API
///
/// El precio viaja como número JSON: la consola hace `price.toFixed(2)`.
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub duration: i32,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            price: service.price.to_f64().unwrap_or(0.0),
            duration: service.duration_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_price_serializes_as_number() {
        let response = ServiceResponse::from(Service {
            id: 1,
            name: "Sustitución de luna delantera".to_string(),
            price: Decimal::new(18950, 2), // 189.50
            duration_minutes: 90,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["price"], 189.5);
        assert_eq!(value["duration"], 90);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let request = CreateServiceRequest {
            name: "Reparación de impacto".to_string(),
            price: -5.0,
            duration: 30,
        };
        assert!(request.validate().is_err());
    }
}
