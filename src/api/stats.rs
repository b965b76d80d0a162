//! Statistics endpoints

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

use super::AuthenticatedUser;

/// Reservation counts by lifecycle status
#[derive(Serialize, ToSchema)]
pub struct ReservationCounts {
    pub total: i64,
    pub active: i64,
    pub completed: i64,
    pub cancelled: i64,
}

/// One month of booking activity
#[derive(Serialize, ToSchema)]
pub struct MonthlyEntry {
    /// Month label, YYYY-MM
    pub period: String,
    pub bookings: i64,
    /// Revenue from non-cancelled bookings made that month
    pub revenue: Decimal,
}

/// Admin dashboard figures
#[derive(Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_vehicles: i64,
    pub available_vehicles: i64,
    pub reservations: ReservationCounts,
    pub total_revenue: Decimal,
    pub pending_violations: i64,
    /// Mean feedback rating, absent when no feedback exists
    pub average_rating: Option<Decimal>,
    /// Last 12 months, oldest first
    pub monthly: Vec<MonthlyEntry>,
}

/// Dashboard statistics (admin)
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    claims.require_admin()?;
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}
