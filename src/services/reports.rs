//! Customer feedback and violation reporting service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ViolationStatus,
        feedback::{CreateFeedback, Feedback, FeedbackDetails},
        violation::{CreateViolation, Violation, ViolationDetails},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Feedback

    /// Submit feedback; when tied to a reservation, the reservation must
    /// belong to the submitter
    pub async fn submit_feedback(
        &self,
        user_id: Uuid,
        data: &CreateFeedback,
    ) -> AppResult<Feedback> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(reservation_id) = data.reservation_id {
            let reservation = self.repository.reservations.get_by_id(reservation_id).await?;
            if reservation.user_id != user_id {
                return Err(AppError::Authorization(
                    "Cannot leave feedback on another user's reservation".to_string(),
                ));
            }
        }

        self.repository.feedback.create(user_id, data).await
    }

    pub async fn list_feedback(&self) -> AppResult<Vec<FeedbackDetails>> {
        self.repository.feedback.list_all().await
    }

    pub async fn my_feedback(&self, user_id: Uuid) -> AppResult<Vec<Feedback>> {
        self.repository.feedback.list_for_user(user_id).await
    }

    // Violations

    /// Report a violation; when tied to a reservation, the reservation must
    /// belong to the reporter
    pub async fn record_violation(
        &self,
        user_id: Uuid,
        data: &CreateViolation,
    ) -> AppResult<Violation> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(reservation_id) = data.reservation_id {
            let reservation = self.repository.reservations.get_by_id(reservation_id).await?;
            if reservation.user_id != user_id {
                return Err(AppError::Authorization(
                    "Cannot report a violation on another user's reservation".to_string(),
                ));
            }
        }

        self.repository.violations.create(user_id, data).await
    }

    pub async fn list_violations(&self) -> AppResult<Vec<ViolationDetails>> {
        self.repository.violations.list_all().await
    }

    pub async fn my_violations(&self, user_id: Uuid) -> AppResult<Vec<Violation>> {
        self.repository.violations.list_for_user(user_id).await
    }

    pub async fn set_violation_status(
        &self,
        id: Uuid,
        status: ViolationStatus,
    ) -> AppResult<Violation> {
        self.repository.violations.update_status(id, status).await
    }
}
