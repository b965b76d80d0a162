//! Customer feedback endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::feedback::{CreateFeedback, Feedback, FeedbackDetails},
    AppState,
};

use super::AuthenticatedUser;

/// Submit feedback
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    security(("bearer_auth" = [])),
    request_body = CreateFeedback,
    responses(
        (status = 201, description = "Feedback submitted", body = Feedback),
        (status = 400, description = "Invalid rating"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Reservation belongs to another user")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let feedback = state
        .services
        .reports
        .submit_feedback(claims.user_id, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Feedback submitted by the authenticated user
#[utoipa::path(
    get,
    path = "/feedback/me",
    tag = "feedback",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User's feedback", body = Vec<Feedback>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn my_feedback(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = state.services.reports.my_feedback(claims.user_id).await?;
    Ok(Json(feedback))
}

/// List all feedback with submitter names (admin)
#[utoipa::path(
    get,
    path = "/feedback",
    tag = "feedback",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All feedback", body = Vec<FeedbackDetails>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<FeedbackDetails>>> {
    claims.require_admin()?;
    let feedback = state.services.reports.list_feedback().await?;
    Ok(Json(feedback))
}
