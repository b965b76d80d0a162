//! Discounts repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::discount::{CreateDiscount, Discount, UpdateDiscount},
};

#[derive(Clone)]
pub struct DiscountsRepository {
    pool: Pool<Postgres>,
}

impl DiscountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all discounts, newest first (admin)
    pub async fn list(&self) -> AppResult<Vec<Discount>> {
        Ok(
            sqlx::query_as::<_, Discount>("SELECT * FROM discounts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// List discounts that are active and within their validity window
    pub async fn list_active(&self) -> AppResult<Vec<Discount>> {
        Ok(sqlx::query_as::<_, Discount>(
            r#"
            SELECT * FROM discounts
            WHERE is_active = TRUE AND start_date <= NOW() AND end_date >= NOW()
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get discount by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Discount> {
        sqlx::query_as::<_, Discount>("SELECT * FROM discounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Discount {} not found", id)))
    }

    /// Look up a currently valid discount by its code.
    ///
    /// Returns `None` for unknown, inactive or out-of-window codes; codes
    /// are matched case-insensitively.
    pub async fn find_valid_by_code(&self, code: &str) -> AppResult<Option<Discount>> {
        Ok(sqlx::query_as::<_, Discount>(
            r#"
            SELECT * FROM discounts
            WHERE UPPER(code) = UPPER($1)
              AND is_active = TRUE
              AND start_date <= NOW() AND end_date >= NOW()
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Create a discount
    pub async fn create(&self, data: &CreateDiscount) -> AppResult<Discount> {
        let row = sqlx::query_as::<_, Discount>(
            r#"
            INSERT INTO discounts (code, percentage, description, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.code)
        .bind(data.percentage)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Discount code '{}' already exists", data.code))
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Update a discount (partial)
    pub async fn update(&self, id: Uuid, data: &UpdateDiscount) -> AppResult<Discount> {
        let mut sets: Vec<String> = Vec::new();
        let mut idx = 0;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    idx += 1;
                    sets.push(format!("{} = ${}", $name, idx));
                }
            };
        }

        add_field!(data.code, "code");
        add_field!(data.percentage, "percentage");
        add_field!(data.description, "description");
        add_field!(data.start_date, "start_date");
        add_field!(data.end_date, "end_date");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        idx += 1;
        let sql = format!(
            "UPDATE discounts SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Discount>(&sql);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.code);
        bind_field!(data.percentage);
        bind_field!(data.description);
        bind_field!(data.start_date);
        bind_field!(data.end_date);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Discount {} not found", id)))
    }

    /// Toggle the active flag
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Discount> {
        sqlx::query_as::<_, Discount>(
            "UPDATE discounts SET is_active = $1 WHERE id = $2 RETURNING *",
        )
        .bind(is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Discount {} not found", id)))
    }

    /// Delete a discount
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM discounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Discount {} not found", id)));
        }
        Ok(())
    }
}
