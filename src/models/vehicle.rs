//! Vehicle model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Vehicle record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Body type (sedan, suv, truck, van, sports, ...)
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Daily rental rate, positive decimal
    pub price_per_day: Decimal,
    pub seats: i32,
    /// automatic or manual
    pub transmission: String,
    /// gasoline, diesel, hybrid, electric
    pub fuel_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Free-form feature labels shown on the detail page
    #[schema(value_type = Option<Vec<String>>)]
    pub features: Option<sqlx::types::Json<Vec<String>>>,
    /// Maintained availability flag; toggled by admins and by the
    /// reservation completion side effect, not derived per request
    pub is_available: bool,
    /// Home location, if assigned
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short vehicle representation embedded in reservation listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleShort {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub image_url: Option<String>,
}

/// Vehicle listing query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct VehicleQuery {
    /// Free-text search over make and model
    pub q: Option<String>,
    /// Filter by body type
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// When true, only vehicles currently open for booking
    pub available: Option<bool>,
}

/// Create vehicle request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicle {
    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(range(min = 1950, max = 2100, message = "Invalid model year"))]
    pub year: i32,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price_per_day: Decimal,
    #[validate(range(min = 1, max = 20, message = "Invalid seat count"))]
    pub seats: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub location_id: Option<Uuid>,
}

/// Update vehicle request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicle {
    pub make: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1950, max = 2100, message = "Invalid model year"))]
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub price_per_day: Option<Decimal>,
    #[validate(range(min = 1, max = 20, message = "Invalid seat count"))]
    pub seats: Option<i32>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub location_id: Option<Uuid>,
}

/// Availability toggle request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAvailability {
    pub is_available: bool,
}
