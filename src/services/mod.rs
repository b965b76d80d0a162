//! Business logic services

pub mod auth;
pub mod booking;
pub mod discounts;
pub mod fleet;
pub mod reports;
pub mod stats;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub booking: booking::BookingService,
    pub fleet: fleet::FleetService,
    pub discounts: discounts::DiscountsService,
    pub reports: reports::ReportsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            booking: booking::BookingService::new(repository.clone()),
            fleet: fleet::FleetService::new(repository.clone()),
            discounts: discounts::DiscountsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
