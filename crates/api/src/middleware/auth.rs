//! JWT Bearer extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use matchday_core::error::CoreError;
use matchday_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// `claims.sub`.
    pub user_id: DbId,
    /// `"admin"` or `"viewer"`.
    pub role: String,
}

/// Pull the token out of an `Authorization: Bearer <token>` value.
fn bearer_token(header: &str) -> Result<&str, CoreError> {
    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
    })?;
    let token = token.trim();
    if token.is_empty() {
        return Err(CoreError::Unauthorized("Empty bearer token".into()));
    }
    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

        let token = bearer_token(header)?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn bearer_prefix_is_required() {
        assert_matches!(bearer_token("Basic abc"), Err(CoreError::Unauthorized(_)));
        assert_matches!(bearer_token("bearer abc"), Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn blank_token_is_rejected() {
        assert_matches!(bearer_token("Bearer    "), Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn token_is_extracted() {
        assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
    }
}
