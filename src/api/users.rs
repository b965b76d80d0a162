//! User administration endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{GrantRole, ProfileWithRoles},
    AppState,
};

use super::AuthenticatedUser;

/// List all users with their roles (admin)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<ProfileWithRoles>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ProfileWithRoles>>> {
    claims.require_admin()?;
    let users = state.services.auth.list_users().await?;
    Ok(Json(users))
}

/// Get one user's profile (self or admin)
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = ProfileWithRoles),
        (status = 403, description = "Not the owner of this profile"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProfileWithRoles>> {
    claims.require_self_or_admin(id)?;
    let profile = state.services.auth.me(id).await?;
    Ok(Json(profile))
}

/// Grant a role to a user (admin)
#[utoipa::path(
    post,
    path = "/users/{id}/roles",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = GrantRole,
    responses(
        (status = 200, description = "Updated profile with roles", body = ProfileWithRoles),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn grant_role(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<GrantRole>,
) -> AppResult<Json<ProfileWithRoles>> {
    claims.require_admin()?;
    let profile = state.services.auth.grant_role(id, request.role).await?;
    Ok(Json(profile))
}
