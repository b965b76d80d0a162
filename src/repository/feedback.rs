//! Feedback repository for database operations

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::feedback::{CreateFeedback, Feedback, FeedbackDetails},
};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: Pool<Postgres>,
}

impl FeedbackRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Submit feedback on behalf of a user
    pub async fn create(&self, user_id: Uuid, data: &CreateFeedback) -> AppResult<Feedback> {
        let row = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (user_id, reservation_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(data.reservation_id)
        .bind(data.rating)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all feedback with submitter names, newest first (admin)
    pub async fn list_all(&self) -> AppResult<Vec<FeedbackDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.user_id, f.reservation_id, f.rating, f.comment,
                   f.created_at, p.full_name AS user_name
            FROM feedback f
            JOIN profiles p ON p.id = f.user_id
            ORDER BY f.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(FeedbackDetails {
                    id: row.try_get("id")?,
                    user_id: row.try_get("user_id")?,
                    user_name: row.try_get("user_name")?,
                    reservation_id: row.try_get("reservation_id")?,
                    rating: row.try_get("rating")?,
                    comment: row.try_get("comment")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    /// List feedback submitted by one user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Feedback>> {
        Ok(sqlx::query_as::<_, Feedback>(
            "SELECT * FROM feedback WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
