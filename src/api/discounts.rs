//! Discount code endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::discount::{CreateDiscount, Discount, UpdateDiscount, UpdateDiscountActive},
    AppState,
};

use super::AuthenticatedUser;

/// Discounts a customer can currently use
#[utoipa::path(
    get,
    path = "/discounts/active",
    tag = "discounts",
    responses(
        (status = 200, description = "Currently valid discounts", body = Vec<Discount>)
    )
)]
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Discount>>> {
    let discounts = state.services.discounts.list_active().await?;
    Ok(Json(discounts))
}

/// List all discounts (admin)
#[utoipa::path(
    get,
    path = "/discounts",
    tag = "discounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All discounts", body = Vec<Discount>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_discounts(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Discount>>> {
    claims.require_admin()?;
    let discounts = state.services.discounts.list().await?;
    Ok(Json(discounts))
}

/// Create a discount (admin)
#[utoipa::path(
    post,
    path = "/discounts",
    tag = "discounts",
    security(("bearer_auth" = [])),
    request_body = CreateDiscount,
    responses(
        (status = 201, description = "Discount created", body = Discount),
        (status = 400, description = "Invalid discount data"),
        (status = 403, description = "Admin privileges required"),
        (status = 409, description = "Code already exists")
    )
)]
pub async fn create_discount(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateDiscount>,
) -> AppResult<(StatusCode, Json<Discount>)> {
    claims.require_admin()?;
    let discount = state.services.discounts.create(&request).await?;
    Ok((StatusCode::CREATED, Json(discount)))
}

/// Update a discount (admin)
#[utoipa::path(
    put,
    path = "/discounts/{id}",
    tag = "discounts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Discount ID")),
    request_body = UpdateDiscount,
    responses(
        (status = 200, description = "Discount updated", body = Discount),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Discount not found")
    )
)]
pub async fn update_discount(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDiscount>,
) -> AppResult<Json<Discount>> {
    claims.require_admin()?;
    let discount = state.services.discounts.update(id, &request).await?;
    Ok(Json(discount))
}

/// Toggle a discount's active flag (admin)
#[utoipa::path(
    patch,
    path = "/discounts/{id}/active",
    tag = "discounts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Discount ID")),
    request_body = UpdateDiscountActive,
    responses(
        (status = 200, description = "Active flag updated", body = Discount),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Discount not found")
    )
)]
pub async fn set_active(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDiscountActive>,
) -> AppResult<Json<Discount>> {
    claims.require_admin()?;
    let discount = state
        .services
        .discounts
        .set_active(id, request.is_active)
        .await?;
    Ok(Json(discount))
}

/// Delete a discount (admin)
#[utoipa::path(
    delete,
    path = "/discounts/{id}",
    tag = "discounts",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Discount ID")),
    responses(
        (status = 204, description = "Discount deleted"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Discount not found")
    )
)]
pub async fn delete_discount(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.discounts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
