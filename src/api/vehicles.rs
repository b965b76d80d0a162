//! Vehicle fleet endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::vehicle::{CreateVehicle, UpdateAvailability, UpdateVehicle, Vehicle, VehicleQuery},
    AppState,
};

use super::AuthenticatedUser;

/// Browse the fleet with optional filters
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    params(VehicleQuery),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<Vehicle>)
    )
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = state.services.fleet.list_vehicles(&query).await?;
    Ok(Json(vehicles))
}

/// Get one vehicle
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "vehicles",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = state.services.fleet.get_vehicle(id).await?;
    Ok(Json(vehicle))
}

/// Add a vehicle to the fleet (admin)
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    request_body = CreateVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Invalid vehicle data"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    claims.require_admin()?;
    let vehicle = state.services.fleet.create_vehicle(&request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Update a vehicle (admin)
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    request_body = UpdateVehicle,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    claims.require_admin()?;
    let vehicle = state.services.fleet.update_vehicle(id, &request).await?;
    Ok(Json(vehicle))
}

/// Remove a vehicle from the fleet (admin)
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.fleet.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set a vehicle's availability flag (admin)
#[utoipa::path(
    patch,
    path = "/vehicles/{id}/availability",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    request_body = UpdateAvailability,
    responses(
        (status = 200, description = "Availability updated", body = Vehicle),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn set_availability(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAvailability>,
) -> AppResult<Json<Vehicle>> {
    claims.require_admin()?;
    let vehicle = state
        .services
        .fleet
        .set_vehicle_availability(id, request.is_available)
        .await?;
    Ok(Json(vehicle))
}
