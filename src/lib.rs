//! DriveHub Car Rental Management Server
//!
//! A Rust REST API server for a car-rental platform: vehicle fleet browsing,
//! reservation booking with server-side availability checks and pricing, and
//! role-gated administration of vehicles, locations, discounts, feedback and
//! violations.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
