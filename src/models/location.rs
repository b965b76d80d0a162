//! Pickup location model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Location record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    /// Only active locations are offered for new bookings
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Short location representation embedded in reservation listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationShort {
    pub id: Uuid,
    pub name: String,
    pub city: String,
}

/// Create location request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub country: Option<String>,
}

/// Update location request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<bool>,
}
