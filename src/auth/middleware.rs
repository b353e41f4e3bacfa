//! Authentication gate
//!
//! Extracts and verifies the bearer token before a protected handler
//! runs. On success the decoded identity is available to the handler as
//! an extractor argument; on any failure the request is rejected with a
//! generic 401 and the handler never executes.

use crate::auth::jwt::{AuthError, UserRole};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated identity decoded from a verified token.
///
/// Lives for the duration of one request; handlers use it for their own
/// authorization decisions (e.g. role-gated deletes). The gate itself
/// decides nothing beyond "authenticated or not".
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized(AuthError::Missing))?;
        if auth_header.is_empty() {
            return Err(ApiError::Unauthorized(AuthError::Missing));
        }

        // Check Bearer scheme
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized(AuthError::Malformed))?;
        if token.is_empty() {
            return Err(ApiError::Unauthorized(AuthError::Missing));
        }

        // Verify with the pre-computed keys from state
        let claims = app_state
            .tokens()
            .verify_token(token)
            .map_err(ApiError::Unauthorized)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized(AuthError::Malformed))?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}
