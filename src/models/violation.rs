//! Violation report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::ViolationStatus;

/// Violation record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Violation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub description: String,
    pub status: ViolationStatus,
    pub created_at: DateTime<Utc>,
}

/// Violation with the reporter's display name (admin listing)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViolationDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub reservation_id: Option<Uuid>,
    pub description: String,
    pub status: ViolationStatus,
    pub created_at: DateTime<Utc>,
}

/// Report violation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateViolation {
    pub reservation_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Status update request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateViolationStatus {
    pub status: ViolationStatus,
}
