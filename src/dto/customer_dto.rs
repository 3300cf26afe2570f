use crate::models::customer::Customer;
use crate::utils::validation::PHONE_RE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: String,

    #[validate(email(message = "El email no es válido"))]
    pub email: String,

    #[validate(regex(path = "PHONE_RE", message = "El teléfono no es válido"))]
    pub phone: String,
}

/// Request para actualizar un cliente existente
///
/// La consola envía el registro completo en el PUT (id y createdAt
/// incluidos); los campos desconocidos se ignoran y los ausentes
/// conservan su valor actual.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: Option<String>,

    #[validate(email(message = "El email no es válido"))]
    pub email: Option<String>,

    #[validate(regex(path = "PHONE_RE", message = "El teléfono no es válido"))]
    pub phone: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_response_uses_camel_case() {
        let response = CustomerResponse::from(Customer {
            id: 7,
            name: "Marta Puig".to_string(),
            email: "marta@example.com".to_string(),
            phone: "600123456".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 7);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
        // La consola parsea la fecha con `new Date(...)`, necesita RFC3339
        assert_eq!(value["createdAt"], "2025-03-14T09:30:00Z");
    }
}
