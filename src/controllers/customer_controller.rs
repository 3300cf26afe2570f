use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        if request.name.trim().is_empty() {
            return Err(AppError::BadRequest("El nombre es requerido".to_string()));
        }

        let customer = self
            .repository
            .create(
                request.name.trim().to_string(),
                request.email.trim().to_string(),
                request.phone.trim().to_string(),
            )
            .await?;

        Ok(customer.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cliente", id))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        let customer = self
            .repository
            .update(id, request.name, request.email, request.phone)
            .await?;

        Ok(customer.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(not_found_error("Cliente", id));
        }

        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "No se puede eliminar el cliente: tiene vehículos, reservas o reseñas asociadas"
                    .to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
