use crate::models::city::City;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una nueva ciudad
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: String,
}

/// Request para actualizar una ciudad existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCityRequest {
    #[validate(length(min = 1, max = 120, message = "El nombre es requerido"))]
    pub name: Option<String>,
}

/// Response de ciudad para la API
#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub id: i64,
    pub name: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
        }
    }
}
