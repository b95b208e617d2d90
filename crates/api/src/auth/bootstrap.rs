//! First-run admin account.
//!
//! When `BOOTSTRAP_ADMIN_USERNAME` and `BOOTSTRAP_ADMIN_PASSWORD` are both
//! set and no user with that name exists, an admin account is created at
//! startup. Existing accounts are never modified.

use matchday_core::roles::ROLE_ADMIN;
use matchday_db::models::user::CreateUser;
use matchday_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Create the admin account if configured and missing. Returns `true` if a
/// user was created.
pub async fn ensure_admin(pool: &PgPool, username: &str, password: &str) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, username).await?.is_some() {
        return Ok(false);
    }

    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}

/// Read the bootstrap credentials from the environment, if both are set.
pub fn credentials_from_env() -> Option<(String, String)> {
    let username = std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok()?;
    let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok()?;
    if username.trim().is_empty() {
        return None;
    }
    Some((username.trim().to_string(), password))
}
