use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
    customers: CustomerRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        // La consola deja teclear el id de cliente a mano; mejor un 400
        // con mensaje que un error de constraint
        if !self.customers.exists(request.customer_id).await? {
            return Err(AppError::BadRequest(format!(
                "El cliente con id '{}' no existe",
                request.customer_id
            )));
        }

        let vehicle = self
            .repository
            .create(
                request.plate.trim().to_string(),
                request.brand.trim().to_string(),
                request.model.trim().to_string(),
                request.customer_id,
            )
            .await?;

        Ok(vehicle.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", id))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        if let Some(customer_id) = request.customer_id {
            if !self.customers.exists(customer_id).await? {
                return Err(AppError::BadRequest(format!(
                    "El cliente con id '{}' no existe",
                    customer_id
                )));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.plate,
                request.brand,
                request.model,
                request.customer_id,
            )
            .await?;

        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(not_found_error("Vehículo", id));
        }

        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar el vehículo: tiene reservas asociadas".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
