//! Reservation model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::ReservationStatus;
use super::location::LocationShort;
use super::vehicle::VehicleShort;

/// Reservation record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub location_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Derived at booking time and persisted
    pub total_price: Decimal,
    pub status: ReservationStatus,
    pub discount_id: Option<Uuid>,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reservation with joined vehicle and location details for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: ReservationStatus,
    pub vehicle: VehicleShort,
    pub location: LocationShort,
    pub created_at: DateTime<Utc>,
}

/// Booking request, validated by the availability gate before any
/// persistence call
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    pub vehicle_id: Uuid,
    pub location_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Optional coupon code; resolved and recorded but not applied to the
    /// total price
    pub discount_code: Option<String>,
}

/// Status transition request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReservationStatus {
    pub status: ReservationStatus,
}
