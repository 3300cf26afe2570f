use crate::models::booking::Booking;
use crate::utils::errors::{not_found_error, AppError};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        scheduled_at: DateTime<Utc>,
        status: String,
        customer_id: i64,
        city_id: i64,
        service_id: i64,
        vehicle_id: i64,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (scheduled_at, status, customer_id, city_id, service_id, vehicle_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(scheduled_at)
        .bind(status)
        .bind(customer_id)
        .bind(city_id)
        .bind(service_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY scheduled_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(bookings)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        scheduled_at: Option<DateTime<Utc>>,
        status: Option<String>,
        customer_id: Option<i64>,
        city_id: Option<i64>,
        service_id: Option<i64>,
        vehicle_id: Option<i64>,
    ) -> Result<Booking, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reserva", id))?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET scheduled_at = $2, status = $3, customer_id = $4, city_id = $5, service_id = $6, vehicle_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(scheduled_at.unwrap_or(current.scheduled_at))
        .bind(status.unwrap_or(current.status))
        .bind(customer_id.unwrap_or(current.customer_id))
        .bind(city_id.unwrap_or(current.city_id))
        .bind(service_id.unwrap_or(current.service_id))
        .bind(vehicle_id.unwrap_or(current.vehicle_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Reserva", id));
        }

        Ok(())
    }
}
