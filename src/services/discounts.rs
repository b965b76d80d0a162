//! Discount code management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::discount::{CreateDiscount, Discount, UpdateDiscount},
    repository::Repository,
};

#[derive(Clone)]
pub struct DiscountsService {
    repository: Repository,
}

impl DiscountsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Discount>> {
        self.repository.discounts.list().await
    }

    /// Discounts a customer can currently use
    pub async fn list_active(&self) -> AppResult<Vec<Discount>> {
        self.repository.discounts.list_active().await
    }

    pub async fn create(&self, data: &CreateDiscount) -> AppResult<Discount> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if data.end_date <= data.start_date {
            return Err(AppError::Validation(
                "End date must be after start date".to_string(),
            ));
        }
        self.repository.discounts.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateDiscount) -> AppResult<Discount> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.discounts.update(id, data).await
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Discount> {
        self.repository.discounts.set_active(id, is_active).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.discounts.delete(id).await
    }
}
