//! Violation report endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::violation::{CreateViolation, UpdateViolationStatus, Violation, ViolationDetails},
    AppState,
};

use super::AuthenticatedUser;

/// Report a violation on the authenticated user's own rental
#[utoipa::path(
    post,
    path = "/violations",
    tag = "violations",
    security(("bearer_auth" = [])),
    request_body = CreateViolation,
    responses(
        (status = 201, description = "Violation reported", body = Violation),
        (status = 400, description = "Invalid violation data"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn report_violation(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateViolation>,
) -> AppResult<(StatusCode, Json<Violation>)> {
    let violation = state
        .services
        .reports
        .record_violation(claims.user_id, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(violation)))
}

/// Violations recorded against the authenticated user
#[utoipa::path(
    get,
    path = "/violations/me",
    tag = "violations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User's violations", body = Vec<Violation>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn my_violations(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Violation>>> {
    let violations = state.services.reports.my_violations(claims.user_id).await?;
    Ok(Json(violations))
}

/// List all violations with offender names (admin)
#[utoipa::path(
    get,
    path = "/violations",
    tag = "violations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All violations", body = Vec<ViolationDetails>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_violations(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ViolationDetails>>> {
    claims.require_admin()?;
    let violations = state.services.reports.list_violations().await?;
    Ok(Json(violations))
}

/// Set a violation's review status (admin)
#[utoipa::path(
    patch,
    path = "/violations/{id}/status",
    tag = "violations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Violation ID")),
    request_body = UpdateViolationStatus,
    responses(
        (status = 200, description = "Status updated", body = Violation),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Violation not found")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateViolationStatus>,
) -> AppResult<Json<Violation>> {
    claims.require_admin()?;
    let violation = state
        .services
        .reports
        .set_violation_status(id, request.status)
        .await?;
    Ok(Json(violation))
}
