//! Booking workflow service
//!
//! Validates rental periods, resolves discount codes and drives the
//! reservation lifecycle. The availability check itself runs inside the
//! repository transaction so it cannot race with a concurrent booking.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ReservationStatus,
        reservation::{CreateReservation, Reservation, ReservationDetails},
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
}

impl BookingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Book a vehicle for the authenticated user.
    ///
    /// A discount code, when supplied, must resolve to a currently valid
    /// discount; it is recorded on the reservation without altering the
    /// total price.
    pub async fn book(
        &self,
        user_id: Uuid,
        data: &CreateReservation,
    ) -> AppResult<Reservation> {
        validate_period(data.start_date, data.end_date, Utc::now())?;

        let discount_id = match data.discount_code.as_deref() {
            Some(code) => Some(
                self.repository
                    .discounts
                    .find_valid_by_code(code)
                    .await?
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Discount code '{}' is not valid", code))
                    })?
                    .id,
            ),
            None => None,
        };

        self.repository
            .reservations
            .create(user_id, data, discount_id)
            .await
    }

    /// Reservations of the authenticated user, newest first
    pub async fn my_reservations(&self, user_id: Uuid) -> AppResult<Vec<ReservationDetails>> {
        self.repository.reservations.list_for_user(user_id).await
    }

    /// All reservations (admin)
    pub async fn list_all(&self) -> AppResult<Vec<ReservationDetails>> {
        self.repository.reservations.list_all().await
    }

    /// Cancel a reservation.
    ///
    /// Only the owner or an admin may cancel; cancelling an already
    /// cancelled reservation is a no-op.
    pub async fn cancel(&self, claims: &UserClaims, id: Uuid) -> AppResult<Reservation> {
        let reservation = self.repository.reservations.get_by_id(id).await?;
        claims.require_self_or_admin(reservation.user_id)?;
        self.repository
            .reservations
            .transition(id, ReservationStatus::Cancelled)
            .await
    }

    /// Apply an arbitrary status transition (admin)
    pub async fn set_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        self.repository.reservations.transition(id, status).await
    }
}

/// Reject empty, inverted or past rental periods before any database work.
fn validate_period(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if end <= start {
        return Err(AppError::Validation(
            "End date must be after start date".to_string(),
        ));
    }
    if start < now {
        return Err(AppError::Validation(
            "Start date cannot be in the past".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn period_must_end_after_it_starts() {
        let now = date(2024, 6, 1);
        assert!(validate_period(date(2024, 6, 10), date(2024, 6, 12), now).is_ok());
        assert!(validate_period(date(2024, 6, 12), date(2024, 6, 10), now).is_err());
        assert!(validate_period(date(2024, 6, 10), date(2024, 6, 10), now).is_err());
    }

    #[test]
    fn period_cannot_start_in_the_past() {
        let now = date(2024, 6, 1);
        assert!(validate_period(date(2024, 5, 30), date(2024, 6, 10), now).is_err());
        assert!(validate_period(now, date(2024, 6, 10), now).is_ok());
    }
}
