//! Users repository: accounts, profiles and role assignments

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::AppRole,
        user::{Account, Profile, ProfileWithRoles},
    },
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create an account, its profile and the default `user` role in one
    /// transaction
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        phone: Option<&str>,
    ) -> AppResult<Account> {
        let mut tx = self.pool.begin().await?;

        let account = sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("An account with email '{}' already exists", email))
            }
            _ => AppError::Database(e),
        })?;

        sqlx::query("INSERT INTO profiles (id, full_name, phone) VALUES ($1, $2, $3)")
            .bind(account.id)
            .bind(full_name)
            .bind(phone)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, 'user')")
            .bind(account.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(account)
    }

    /// Look up an account by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(
            sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    /// Get a user's profile
    pub async fn get_profile(&self, id: Uuid) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Roles assigned to a user
    pub async fn get_roles(&self, id: Uuid) -> AppResult<Vec<AppRole>> {
        let rows = sqlx::query("SELECT role FROM user_roles WHERE user_id = $1")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| row.try_get::<AppRole, _>("role").map_err(AppError::from))
            .collect()
    }

    /// List all profiles with their role sets (admin)
    pub async fn list_with_roles(&self) -> AppResult<Vec<ProfileWithRoles>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.full_name, p.phone, p.created_at,
                   COALESCE(ARRAY_AGG(ur.role) FILTER (WHERE ur.role IS NOT NULL), '{}') AS roles
            FROM profiles p
            LEFT JOIN user_roles ur ON ur.user_id = p.id
            GROUP BY p.id, p.full_name, p.phone, p.created_at
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let raw: Vec<String> = row.try_get("roles")?;
                Ok(ProfileWithRoles {
                    id: row.try_get("id")?,
                    full_name: row.try_get("full_name")?,
                    phone: row.try_get("phone")?,
                    roles: parse_roles(&raw)?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    /// Grant a role; granting an already-held role is a no-op
    pub async fn grant_role(&self, user_id: Uuid, role: AppRole) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(role)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn parse_roles(raw: &[String]) -> AppResult<Vec<AppRole>> {
    raw.iter()
        .map(|s| {
            s.parse::<AppRole>()
                .map_err(|e| AppError::Internal(format!("Corrupt role value: {}", e)))
        })
        .collect()
}
