use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::jwt::{self, TokenError};
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;

/// Authenticated identity attached to a request. Accepts the session token
/// from an `Authorization: Bearer` header or from the `token` cookie; both
/// carry the identical JWT, so every guarded route takes either transport.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    /// Single role gate, parameterized by the allowed set.
    fn authorize(&self, allowed: &[Role], denial: &str) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden(denial.to_string()))
        }
    }

    /// Admin routes also admit superadmins.
    pub fn require_admin(&self) -> Result<(), AppError> {
        self.authorize(
            &[Role::Admin, Role::SuperAdmin],
            "Access Denied: Admins Only",
        )
    }

    pub fn require_superadmin(&self) -> Result<(), AppError> {
        self.authorize(&[Role::SuperAdmin], "Access Denied: SuperAdmins Only")
    }
}

fn claims_to_auth(claims: jwt::Claims) -> AuthUser {
    AuthUser {
        user_id: claims.sub,
        role: claims.role,
    }
}

fn token_rejection(err: TokenError) -> AppError {
    match err {
        TokenError::Expired => {
            AppError::Unauthorized("Token expired. Please log in again.".to_string())
        }
        TokenError::Invalid => {
            AppError::Unauthorized("Invalid token. Please log in again.".to_string())
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // Bearer token from the Authorization header first
        if let Some(auth_header) = parts.headers.get("authorization") {
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                let claims = jwt::decode_token(token, &state.config.jwt_secret)
                    .map_err(token_rejection)?;
                return Ok(claims_to_auth(claims));
            }
        }

        // Fall back to the session cookie
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get("token") {
            let claims = jwt::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(token_rejection)?;
            return Ok(claims_to_auth(claims));
        }

        Err(AppError::Unauthorized(
            "Not authorized. Please log in.".to_string(),
        ))
    }
}
