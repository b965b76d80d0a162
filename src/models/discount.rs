//! Discount code model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Discount record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Discount {
    pub id: Uuid,
    pub code: String,
    /// Percentage off, 1-100
    pub percentage: i32,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create discount request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDiscount {
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    #[validate(range(min = 1, max = 100, message = "Percentage must be 1-100"))]
    pub percentage: i32,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Update discount request (admin)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDiscount {
    pub code: Option<String>,
    #[validate(range(min = 1, max = 100, message = "Percentage must be 1-100"))]
    pub percentage: Option<i32>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Active flag toggle request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDiscountActive {
    pub is_active: bool,
}
