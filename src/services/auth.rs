//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        enums::AppRole,
        user::{LoginRequest, LoginResponse, Profile, ProfileWithRoles, RegisterRequest, UserClaims},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new account and return its profile
    pub async fn register(&self, data: &RegisterRequest) -> AppResult<Profile> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&data.password)?;
        let account = self
            .repository
            .users
            .create(
                &data.email,
                &password_hash,
                &data.full_name,
                data.phone.as_deref(),
            )
            .await?;

        self.repository.users.get_profile(account.id).await
    }

    /// Authenticate by email and password, returning a bearer token
    pub async fn login(&self, data: &LoginRequest) -> AppResult<LoginResponse> {
        let account = self
            .repository
            .users
            .get_by_email(&data.email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !verify_password(&account.password_hash, &data.password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let roles = self.repository.users.get_roles(account.id).await?;

        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: account.email.clone(),
            user_id: account.id,
            roles: roles.clone(),
            exp: now + self.config.jwt_expiration_hours as i64 * 3600,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            user_id: account.id,
            roles,
        })
    }

    /// Profile of the authenticated user
    pub async fn me(&self, user_id: Uuid) -> AppResult<ProfileWithRoles> {
        let profile = self.repository.users.get_profile(user_id).await?;
        let roles = self.repository.users.get_roles(user_id).await?;
        Ok(ProfileWithRoles {
            id: profile.id,
            full_name: profile.full_name,
            phone: profile.phone,
            roles,
            created_at: profile.created_at,
        })
    }

    /// List all users with their roles (admin)
    pub async fn list_users(&self) -> AppResult<Vec<ProfileWithRoles>> {
        self.repository.users.list_with_roles().await
    }

    /// Grant a role to a user and return the updated profile (admin)
    pub async fn grant_role(&self, user_id: Uuid, role: AppRole) -> AppResult<ProfileWithRoles> {
        // 404 for unknown users before touching user_roles
        self.repository.users.get_profile(user_id).await?;
        self.repository.users.grant_role(user_id, role).await?;
        self.me(user_id).await
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password(&hash, "correct horse battery staple").unwrap());
        assert!(!verify_password(&hash, "wrong password").unwrap());
    }
}
