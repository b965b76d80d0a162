//! API integration tests
//!
//! These run against a live server with seeded data (an admin account
//! admin@drivehub.io / admin-password and at least one available vehicle
//! at an active location).

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an admin token
async fn get_admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@drivehub.io",
            "password": "admin-password"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@drivehub.io",
            "password": "admin-password"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@drivehub.io",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["roles"].as_array().unwrap().iter().any(|r| r == "admin"));
}

#[tokio::test]
#[ignore]
async fn test_list_vehicles_is_public() {
    let client = Client::new();

    let response = client
        .get(format!("{}/vehicles?available=true", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
    for vehicle in body.as_array().unwrap() {
        assert_eq!(vehicle["is_available"], true);
    }
}

#[tokio::test]
#[ignore]
async fn test_booking_requires_authentication() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "vehicle_id": "00000000-0000-0000-0000-000000000000",
            "location_id": "00000000-0000-0000-0000-000000000000",
            "start_date": "2030-06-01T00:00:00Z",
            "end_date": "2030-06-04T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_inverted_period() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "vehicle_id": "00000000-0000-0000-0000-000000000000",
            "location_id": "00000000-0000-0000-0000-000000000000",
            "start_date": "2030-06-04T00:00:00Z",
            "end_date": "2030-06-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_book_and_cancel_reservation() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Pick an available vehicle and an active location
    let vehicles: Value = client
        .get(format!("{}/vehicles?available=true", BASE_URL))
        .send()
        .await
        .expect("Failed to list vehicles")
        .json()
        .await
        .expect("Failed to parse vehicles");
    let vehicle = &vehicles.as_array().expect("No vehicle array")[0];

    let locations: Value = client
        .get(format!("{}/locations?active=true", BASE_URL))
        .send()
        .await
        .expect("Failed to list locations")
        .json()
        .await
        .expect("Failed to parse locations");
    let location = &locations.as_array().expect("No location array")[0];

    // Book for three days
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "vehicle_id": vehicle["id"],
            "location_id": location["id"],
            "start_date": "2030-06-01T00:00:00Z",
            "end_date": "2030-06-04T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let reservation: Value = response.json().await.expect("Failed to parse reservation");
    assert_eq!(reservation["status"], "active");
    let reservation_id = reservation["id"].as_str().expect("No reservation id");

    // Cancel it
    let response = client
        .post(format!("{}/reservations/{}/cancel", BASE_URL, reservation_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send cancel request");

    assert!(response.status().is_success());
    let cancelled: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(cancelled["status"], "cancelled");

    // Cancelling again is a no-op
    let response = client
        .post(format!("{}/reservations/{}/cancel", BASE_URL, reservation_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send second cancel request");

    assert!(response.status().is_success());
    let still_cancelled: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(still_cancelled["status"], "cancelled");
}

#[tokio::test]
#[ignore]
async fn test_completing_reservation_frees_vehicle() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let vehicles: Value = client
        .get(format!("{}/vehicles?available=true", BASE_URL))
        .send()
        .await
        .expect("Failed to list vehicles")
        .json()
        .await
        .expect("Failed to parse vehicles");
    let vehicle_id = vehicles.as_array().expect("No vehicle array")[0]["id"]
        .as_str()
        .expect("No vehicle id")
        .to_string();

    let locations: Value = client
        .get(format!("{}/locations", BASE_URL))
        .send()
        .await
        .expect("Failed to list locations")
        .json()
        .await
        .expect("Failed to parse locations");
    let location = &locations.as_array().expect("No location array")[0];

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "vehicle_id": vehicle_id,
            "location_id": location["id"],
            "start_date": "2030-07-01T00:00:00Z",
            "end_date": "2030-07-04T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send booking request");

    assert_eq!(response.status(), 201);
    let reservation: Value = response.json().await.expect("Failed to parse reservation");
    let reservation_id = reservation["id"].as_str().expect("No reservation id");

    // Admin marks the rental completed
    let response = client
        .patch(format!("{}/reservations/{}/status", BASE_URL, reservation_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .expect("Failed to send status update");

    assert!(response.status().is_success());
    let completed: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(completed["status"], "completed");

    // The vehicle is back in the available fleet
    let vehicle: Value = client
        .get(format!("{}/vehicles/{}", BASE_URL, vehicle_id))
        .send()
        .await
        .expect("Failed to get vehicle")
        .json()
        .await
        .expect("Failed to parse vehicle");
    assert_eq!(vehicle["is_available"], true);
}

#[tokio::test]
#[ignore]
async fn test_unavailable_vehicle_cannot_be_booked() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let vehicles: Value = client
        .get(format!("{}/vehicles?available=true", BASE_URL))
        .send()
        .await
        .expect("Failed to list vehicles")
        .json()
        .await
        .expect("Failed to parse vehicles");
    let vehicle_id = vehicles.as_array().expect("No vehicle array")[0]["id"]
        .as_str()
        .expect("No vehicle id")
        .to_string();

    let locations: Value = client
        .get(format!("{}/locations", BASE_URL))
        .send()
        .await
        .expect("Failed to list locations")
        .json()
        .await
        .expect("Failed to parse locations");
    let location = &locations.as_array().expect("No location array")[0];

    // Pull the vehicle out of the fleet
    let response = client
        .patch(format!("{}/vehicles/{}/availability", BASE_URL, vehicle_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "is_available": false }))
        .send()
        .await
        .expect("Failed to set availability");
    assert!(response.status().is_success());

    let before: Value = client
        .get(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list reservations")
        .json()
        .await
        .expect("Failed to parse reservations");
    let count_before = before.as_array().expect("No reservation array").len();

    // Booking is refused
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "vehicle_id": vehicle_id,
            "location_id": location["id"],
            "start_date": "2030-08-01T00:00:00Z",
            "end_date": "2030-08-04T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send booking request");

    assert_eq!(response.status(), 422);

    // No reservation row was created
    let after: Value = client
        .get(format!("{}/reservations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list reservations")
        .json()
        .await
        .expect("Failed to parse reservations");
    assert_eq!(after.as_array().expect("No reservation array").len(), count_before);

    // Put the vehicle back
    let response = client
        .patch(format!("{}/vehicles/{}/availability", BASE_URL, vehicle_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "is_available": true }))
        .send()
        .await
        .expect("Failed to restore availability");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_public_location_listing_hides_inactive() {
    let client = Client::new();

    // Unauthenticated callers get active locations even when asking for all
    let response = client
        .get(format!("{}/locations?active=false", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    for location in body.as_array().expect("No location array") {
        assert_eq!(location["is_active"], true);
    }
}

#[tokio::test]
#[ignore]
async fn test_admin_can_grant_admin_role() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Fresh user so repeated runs do not collide on the email
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_millis();
    let email = format!("fleet-manager-{}@drivehub.io", suffix);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "manager-password",
            "full_name": "Fleet Manager"
        }))
        .send()
        .await
        .expect("Failed to register user");
    assert_eq!(response.status(), 201);
    let profile: Value = response.json().await.expect("Failed to parse profile");
    let user_id = profile["id"].as_str().expect("No user id");

    let response = client
        .post(format!("{}/users/{}/roles", BASE_URL, user_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "role": "admin" }))
        .send()
        .await
        .expect("Failed to grant role");

    assert!(response.status().is_success());
    let updated: Value = response.json().await.expect("Failed to parse response");
    let roles = updated["roles"].as_array().expect("No roles array");
    assert!(roles.iter().any(|r| r == "admin"));
    assert!(roles.iter().any(|r| r == "user"));

    // Granting an already-held role is a no-op
    let response = client
        .post(format!("{}/users/{}/roles", BASE_URL, user_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "role": "admin" }))
        .send()
        .await
        .expect("Failed to re-grant role");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_stats_require_admin() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
