//! Fleet management service: vehicles and pickup locations

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        location::{CreateLocation, Location, UpdateLocation},
        vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct FleetService {
    repository: Repository,
}

impl FleetService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Vehicles

    pub async fn list_vehicles(&self, query: &VehicleQuery) -> AppResult<Vec<Vehicle>> {
        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(AppError::Validation(
                    "min_price cannot exceed max_price".to_string(),
                ));
            }
        }
        self.repository.vehicles.list(query).await
    }

    pub async fn get_vehicle(&self, id: Uuid) -> AppResult<Vehicle> {
        self.repository.vehicles.get_by_id(id).await
    }

    pub async fn create_vehicle(&self, data: &CreateVehicle) -> AppResult<Vehicle> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        require_positive_rate(Some(data.price_per_day))?;
        self.repository.vehicles.create(data).await
    }

    pub async fn update_vehicle(&self, id: Uuid, data: &UpdateVehicle) -> AppResult<Vehicle> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        require_positive_rate(data.price_per_day)?;
        self.repository.vehicles.update(id, data).await
    }

    pub async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        self.repository.vehicles.delete(id).await
    }

    pub async fn set_vehicle_availability(
        &self,
        id: Uuid,
        is_available: bool,
    ) -> AppResult<Vehicle> {
        self.repository.vehicles.set_availability(id, is_available).await
    }

    // Locations

    pub async fn list_locations(&self, active_only: bool) -> AppResult<Vec<Location>> {
        self.repository.locations.list(active_only).await
    }

    pub async fn get_location(&self, id: Uuid) -> AppResult<Location> {
        self.repository.locations.get_by_id(id).await
    }

    pub async fn create_location(&self, data: &CreateLocation) -> AppResult<Location> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.locations.create(data).await
    }

    pub async fn update_location(&self, id: Uuid, data: &UpdateLocation) -> AppResult<Location> {
        self.repository.locations.update(id, data).await
    }

    pub async fn delete_location(&self, id: Uuid) -> AppResult<()> {
        self.repository.locations.delete(id).await
    }
}

fn require_positive_rate(rate: Option<Decimal>) -> AppResult<()> {
    match rate {
        Some(r) if r <= Decimal::ZERO => Err(AppError::Validation(
            "Daily rate must be positive".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_rate_must_be_positive() {
        assert!(require_positive_rate(Some(Decimal::from(50))).is_ok());
        assert!(require_positive_rate(None).is_ok());
        assert!(require_positive_rate(Some(Decimal::ZERO)).is_err());
        assert!(require_positive_rate(Some(Decimal::from(-10))).is_err());
    }
}
