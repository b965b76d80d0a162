//! Reservation booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, UpdateReservationStatus,
    },
    AppState,
};

use super::AuthenticatedUser;

/// Book a vehicle
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Invalid booking data"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Vehicle or location not found"),
        (status = 422, description = "Vehicle not available or location inactive")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.services.booking.book(claims.user_id, &request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Reservations of the authenticated user
#[utoipa::path(
    get,
    path = "/reservations/me",
    tag = "reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User's reservations", body = Vec<ReservationDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn my_reservations(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let reservations = state.services.booking.my_reservations(claims.user_id).await?;
    Ok(Json(reservations))
}

/// List all reservations (admin)
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDetails>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    claims.require_admin()?;
    let reservations = state.services.booking.list_all().await?;
    Ok(Json(reservations))
}

/// Cancel a reservation (owner or admin)
#[utoipa::path(
    post,
    path = "/reservations/{id}/cancel",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = Reservation),
        (status = 403, description = "Not the owner of this reservation"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Reservation already completed")
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.booking.cancel(&claims, id).await?;
    Ok(Json(reservation))
}

/// Transition a reservation's status (admin)
#[utoipa::path(
    patch,
    path = "/reservations/{id}/status",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    request_body = UpdateReservationStatus,
    responses(
        (status = 200, description = "Status updated", body = Reservation),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Transition not allowed from current status")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservationStatus>,
) -> AppResult<Json<Reservation>> {
    claims.require_admin()?;
    let reservation = state.services.booking.set_status(id, request.status).await?;
    Ok(Json(reservation))
}
