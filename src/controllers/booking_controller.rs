use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::models::booking::BookingStatus;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::city_repository::CityRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

pub struct BookingController {
    repository: BookingRepository,
    customers: CustomerRepository,
    cities: CityRepository,
    services: ServiceRepository,
    vehicles: VehicleRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            cities: CityRepository::new(pool.clone()),
            services: ServiceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> Result<BookingResponse, AppError> {
        request.validate()?;

        let status = parse_status(&request.status)?;

        self.check_references(
            Some(request.customer_id),
            Some(request.city_id),
            Some(request.service_id),
            Some(request.vehicle_id),
        )
        .await?;

        // El formulario de la consola no envía fecha
        let scheduled_at = request.date.unwrap_or_else(Utc::now);

        let booking = self
            .repository
            .create(
                scheduled_at,
                status.as_str().to_string(),
                request.customer_id,
                request.city_id,
                request.service_id,
                request.vehicle_id,
            )
            .await?;

        Ok(booking.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<BookingResponse, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reserva", id))?;

        Ok(booking.into())
    }

    pub async fn list(&self) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.repository.find_all().await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateBookingRequest,
    ) -> Result<BookingResponse, AppError> {
        request.validate()?;

        let status = match request.status {
            Some(ref value) => Some(parse_status(value)?.as_str().to_string()),
            None => None,
        };

        self.check_references(
            request.customer_id,
            request.city_id,
            request.service_id,
            request.vehicle_id,
        )
        .await?;

        let booking = self
            .repository
            .update(
                id,
                request.date,
                status,
                request.customer_id,
                request.city_id,
                request.service_id,
                request.vehicle_id,
            )
            .await?;

        Ok(booking.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Comprueba que todas las referencias presentes existan antes de escribir
    async fn check_references(
        &self,
        customer_id: Option<i64>,
        city_id: Option<i64>,
        service_id: Option<i64>,
        vehicle_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(id) = customer_id {
            if !self.customers.exists(id).await? {
                return Err(AppError::BadRequest(format!(
                    "El cliente con id '{}' no existe",
                    id
                )));
            }
        }

        if let Some(id) = city_id {
            if !self.cities.exists(id).await? {
                return Err(AppError::BadRequest(format!(
                    "La ciudad con id '{}' no existe",
                    id
                )));
            }
        }

        if let Some(id) = service_id {
            if !self.services.exists(id).await? {
                return Err(AppError::BadRequest(format!(
                    "El servicio con id '{}' no existe",
                    id
                )));
            }
        }

        if let Some(id) = vehicle_id {
            if !self.vehicles.exists(id).await? {
                return Err(AppError::BadRequest(format!(
                    "El vehículo con id '{}' no existe",
                    id
                )));
            }
        }

        Ok(())
    }
}

fn parse_status(value: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::parse(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Estado de reserva inválido '{}'; valores permitidos: {}",
            value,
            BookingStatus::allowed().join(", ")
        ))
    })
}
