//! Customer feedback model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Feedback record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    /// Star rating, 1-5
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Feedback with the submitter's display name (admin listing)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub reservation_id: Option<Uuid>,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Submit feedback request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedback {
    pub reservation_id: Option<Uuid>,
    #[validate(range(min = 1, max = 5, message = "Rating must be 1-5"))]
    pub rating: i32,
    pub comment: Option<String>,
}
