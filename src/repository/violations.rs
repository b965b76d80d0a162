//! Violations repository for database operations

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ViolationStatus,
        violation::{CreateViolation, Violation, ViolationDetails},
    },
};

#[derive(Clone)]
pub struct ViolationsRepository {
    pool: Pool<Postgres>,
}

impl ViolationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a violation against a user, starting in `pending`
    pub async fn create(&self, user_id: Uuid, data: &CreateViolation) -> AppResult<Violation> {
        let row = sqlx::query_as::<_, Violation>(
            r#"
            INSERT INTO violations (user_id, reservation_id, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(data.reservation_id)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all violations with the offender's name, newest first (admin)
    pub async fn list_all(&self) -> AppResult<Vec<ViolationDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT vi.id, vi.user_id, vi.reservation_id, vi.description,
                   vi.status, vi.created_at, p.full_name AS user_name
            FROM violations vi
            JOIN profiles p ON p.id = vi.user_id
            ORDER BY vi.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(ViolationDetails {
                    id: row.try_get("id")?,
                    user_id: row.try_get("user_id")?,
                    user_name: row.try_get("user_name")?,
                    reservation_id: row.try_get("reservation_id")?,
                    description: row.try_get("description")?,
                    status: row.try_get("status")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    /// List violations recorded against one user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Violation>> {
        Ok(sqlx::query_as::<_, Violation>(
            "SELECT * FROM violations WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Set a violation's review status
    pub async fn update_status(&self, id: Uuid, status: ViolationStatus) -> AppResult<Violation> {
        sqlx::query_as::<_, Violation>(
            "UPDATE violations SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Violation {} not found", id)))
    }
}
