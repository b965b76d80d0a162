//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, discounts, feedback, health, locations, reservations, stats, users, vehicles, violations,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DriveHub API",
        version = "1.0.0",
        description = "Car Rental Platform REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "DriveHub Team", email = "contact@drivehub.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        vehicles::set_availability,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Reservations
        reservations::create_reservation,
        reservations::my_reservations,
        reservations::list_reservations,
        reservations::cancel_reservation,
        reservations::update_status,
        // Discounts
        discounts::list_active,
        discounts::list_discounts,
        discounts::create_discount,
        discounts::update_discount,
        discounts::set_active,
        discounts::delete_discount,
        // Feedback
        feedback::submit_feedback,
        feedback::my_feedback,
        feedback::list_feedback,
        // Violations
        violations::report_violation,
        violations::my_violations,
        violations::list_violations,
        violations::update_status,
        // Users
        users::list_users,
        users::get_user,
        users::grant_role,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::Profile,
            crate::models::user::ProfileWithRoles,
            crate::models::user::GrantRole,
            crate::models::enums::AppRole,
            // Vehicles
            crate::models::vehicle::Vehicle,
            crate::models::vehicle::VehicleShort,
            crate::models::vehicle::VehicleQuery,
            crate::models::vehicle::CreateVehicle,
            crate::models::vehicle::UpdateVehicle,
            crate::models::vehicle::UpdateAvailability,
            // Locations
            crate::models::location::Location,
            crate::models::location::LocationShort,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservationStatus,
            crate::models::enums::ReservationStatus,
            // Discounts
            crate::models::discount::Discount,
            crate::models::discount::CreateDiscount,
            crate::models::discount::UpdateDiscount,
            crate::models::discount::UpdateDiscountActive,
            // Feedback
            crate::models::feedback::Feedback,
            crate::models::feedback::FeedbackDetails,
            crate::models::feedback::CreateFeedback,
            // Violations
            crate::models::violation::Violation,
            crate::models::violation::ViolationDetails,
            crate::models::violation::CreateViolation,
            crate::models::violation::UpdateViolationStatus,
            crate::models::enums::ViolationStatus,
            // Stats
            stats::DashboardStats,
            stats::ReservationCounts,
            stats::MonthlyEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "vehicles", description = "Vehicle fleet management"),
        (name = "locations", description = "Pickup location management"),
        (name = "reservations", description = "Reservation booking"),
        (name = "discounts", description = "Discount code management"),
        (name = "feedback", description = "Customer feedback"),
        (name = "violations", description = "Violation reports"),
        (name = "users", description = "User administration"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
