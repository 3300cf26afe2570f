use crate::dto::city_dto::{CityResponse, CreateCityRequest, UpdateCityRequest};
use crate::repositories::city_repository::CityRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct CityController {
    repository: CityRepository,
}

impl CityController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CityRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCityRequest) -> Result<CityResponse, AppError> {
        request.validate()?;

        let name = request.name.trim().to_string();
        if self.repository.name_exists(&name, None).await? {
            return Err(conflict_error("Ciudad", "nombre", &name));
        }

        let city = self.repository.create(name).await?;

        Ok(city.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CityResponse, AppError> {
        let city = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ciudad", id))?;

        Ok(city.into())
    }

    pub async fn list(&self) -> Result<Vec<CityResponse>, AppError> {
        let cities = self.repository.find_all().await?;

        Ok(cities.into_iter().map(CityResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCityRequest,
    ) -> Result<CityResponse, AppError> {
        request.validate()?;

        let name = request.name.map(|n| n.trim().to_string());
        if let Some(ref name) = name {
            if self.repository.name_exists(name, Some(id)).await? {
                return Err(conflict_error("Ciudad", "nombre", name));
            }
        }

        let city = self.repository.update(id, name).await?;

        Ok(city.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(not_found_error("Ciudad", id));
        }

        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar la ciudad: tiene reservas asociadas".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
