use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

pub struct ServiceController {
    repository: ServiceRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateServiceRequest) -> Result<ServiceResponse, AppError> {
        request.validate()?;

        // El precio llega como número JSON; se persiste como NUMERIC(10,2)
        let price = Decimal::from_f64_retain(request.price)
            .ok_or_else(|| bad_request_error("El precio no es válido"))?
            .round_dp(2);

        let service = self
            .repository
            .create(request.name.trim().to_string(), price, request.duration)
            .await?;

        Ok(service.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ServiceResponse, AppError> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Servicio", id))?;

        Ok(service.into())
    }

    pub async fn list(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.repository.find_all().await?;

        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateServiceRequest,
    ) -> Result<ServiceResponse, AppError> {
        request.validate()?;

        let price = match request.price {
            Some(value) => Some(
                Decimal::from_f64_retain(value)
                    .ok_or_else(|| bad_request_error("El precio no es válido"))?
                    .round_dp(2),
            ),
            None => None,
        };

        let service = self
            .repository
            .update(id, request.name, price, request.duration)
            .await?;

        Ok(service.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(not_found_error("Servicio", id));
        }

        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar el servicio: tiene reservas asociadas".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
