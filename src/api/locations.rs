//! Pickup location endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::location::{CreateLocation, Location, UpdateLocation},
    AppState,
};

use super::AuthenticatedUser;

#[derive(Deserialize, IntoParams)]
pub struct LocationListQuery {
    /// Admins may pass `active=false` to include closed locations;
    /// everyone else only sees locations open for pickups
    pub active: Option<bool>,
}

/// Non-admin callers always get the active-only listing
fn active_only(requested: Option<bool>, is_admin: bool) -> bool {
    !(is_admin && requested == Some(false))
}

/// List pickup locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    params(LocationListQuery),
    responses(
        (status = 200, description = "Locations", body = Vec<Location>)
    )
)]
pub async fn list_locations(
    State(state): State<AppState>,
    user: Option<AuthenticatedUser>,
    Query(query): Query<LocationListQuery>,
) -> AppResult<Json<Vec<Location>>> {
    let is_admin = user.map(|AuthenticatedUser(c)| c.is_admin()).unwrap_or(false);
    let locations = state
        .services
        .fleet
        .list_locations(active_only(query.active, is_admin))
        .await?;
    Ok(Json(locations))
}

/// Get one location
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = Uuid, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location details", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Location>> {
    let location = state.services.fleet.get_location(id).await?;
    Ok(Json(location))
}

/// Create a pickup location (admin)
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    security(("bearer_auth" = [])),
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Invalid location data"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    claims.require_admin()?;
    let location = state.services.fleet.create_location(&request).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Update a location (admin)
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Location ID")),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    claims.require_admin()?;
    let location = state.services.fleet.update_location(id, &request).await?;
    Ok(Json(location))
}

/// Delete a location (admin)
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.fleet.delete_location(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::active_only;

    #[test]
    fn anonymous_and_plain_users_only_see_active_locations() {
        assert!(active_only(None, false));
        assert!(active_only(Some(true), false));
        assert!(active_only(Some(false), false));
    }

    #[test]
    fn admins_can_opt_into_the_full_listing() {
        assert!(active_only(None, true));
        assert!(active_only(Some(true), true));
        assert!(!active_only(Some(false), true));
    }
}
