//! Reservations repository for database operations
//!
//! Booking and status transitions run inside a single transaction with the
//! vehicle row locked (`SELECT ... FOR UPDATE`), so two concurrent bookings
//! of the same vehicle serialize on the availability check.

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ReservationStatus,
        location::{Location, LocationShort},
        reservation::{CreateReservation, Reservation, ReservationDetails},
        vehicle::{Vehicle, VehicleShort},
    },
    pricing,
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Book a vehicle.
    ///
    /// The vehicle row is locked for the duration of the check-then-insert,
    /// the pickup location must be active, and the total price is derived
    /// from the locked vehicle's daily rate. Booking does not flip the
    /// vehicle's availability flag.
    pub async fn create(
        &self,
        user_id: Uuid,
        data: &CreateReservation,
        discount_id: Option<Uuid>,
    ) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await?;

        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(data.vehicle_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Vehicle {} not found", data.vehicle_id))
                })?;

        if !vehicle.is_available {
            return Err(AppError::BusinessRule(
                "Vehicle is not available for booking".to_string(),
            ));
        }

        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(data.location_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Location {} not found", data.location_id))
            })?;

        if !location.is_active {
            return Err(AppError::BusinessRule(
                "Pickup location is not active".to_string(),
            ));
        }

        let total_price =
            pricing::rental_price(data.start_date, data.end_date, vehicle.price_per_day);

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                user_id, vehicle_id, location_id, start_date, end_date,
                total_price, status, discount_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'active', $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(data.vehicle_id)
        .bind(data.location_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(total_price)
        .bind(discount_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(reservation)
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// List a user's reservations with vehicle and location details,
    /// newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<ReservationDetails>> {
        let rows = sqlx::query(&format!("{} WHERE r.user_id = $1 {}", DETAILS_SELECT, DETAILS_ORDER))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_details).collect()
    }

    /// List all reservations with vehicle and location details (admin)
    pub async fn list_all(&self) -> AppResult<Vec<ReservationDetails>> {
        let rows = sqlx::query(&format!("{} {}", DETAILS_SELECT, DETAILS_ORDER))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_details).collect()
    }

    /// Apply a status transition.
    ///
    /// Re-applying the current status is a no-op that returns the record
    /// unchanged. Terminal states (`completed`, `cancelled`) accept no
    /// further transitions. Completing a reservation marks its vehicle
    /// available again, in the same transaction.
    pub async fn transition(
        &self,
        id: Uuid,
        new_status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await?;

        let current =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if current.status == new_status {
            tx.commit().await?;
            return Ok(current);
        }

        if current.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Reservation is {} and cannot change status",
                current.status
            )));
        }

        let updated = sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(new_status)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if new_status == ReservationStatus::Completed {
            sqlx::query("UPDATE vehicles SET is_available = TRUE, updated_at = NOW() WHERE id = $1")
                .bind(current.vehicle_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(updated)
    }
}

const DETAILS_SELECT: &str = r#"
    SELECT r.id, r.user_id, r.start_date, r.end_date, r.total_price, r.status,
           r.created_at,
           v.id AS vehicle_id, v.make, v.model, v.image_url,
           l.id AS location_id, l.name AS location_name, l.city AS location_city
    FROM reservations r
    JOIN vehicles v ON v.id = r.vehicle_id
    JOIN locations l ON l.id = r.location_id
"#;

const DETAILS_ORDER: &str = "ORDER BY r.created_at DESC";

fn row_to_details(row: &sqlx::postgres::PgRow) -> AppResult<ReservationDetails> {
    Ok(ReservationDetails {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        total_price: row.try_get("total_price")?,
        status: row.try_get("status")?,
        vehicle: VehicleShort {
            id: row.try_get("vehicle_id")?,
            make: row.try_get("make")?,
            model: row.try_get("model")?,
            image_url: row.try_get("image_url")?,
        },
        location: LocationShort {
            id: row.try_get("location_id")?,
            name: row.try_get("location_name")?,
            city: row.try_get("location_city")?,
        },
        created_at: row.try_get("created_at")?,
    })
}
