use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::jwt::{self, Claims};
use crate::auth::{otp, password};
use crate::db;
use crate::error::AppError;
use crate::models::{PublicUser, Role};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerifyOtpRequest {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub user_id: Option<String>,
    pub otp: Option<String>,
}

#[derive(Deserialize)]
pub struct SendResetOtpRequest {
    pub email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
    pub new_password: Option<String>,
}

/// Empty strings count as absent, matching the form-shaped clients.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid user ID".to_string()))
}

fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build(("token", token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .max_age(time::Duration::days(jwt::TOKEN_TTL_DAYS))
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(("token", ""))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::ZERO)
        .build()
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    let (Some(name), Some(email), Some(pw), Some(confirm)) = (
        required(&req.name),
        required(&req.email),
        required(&req.password),
        required(&req.confirm_password),
    ) else {
        return Err(AppError::BadRequest(
            "Please fill all the fields".to_string(),
        ));
    };

    if pw != confirm {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }
    if pw.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    if db::users::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let pw_hash = password::hash(pw).map_err(AppError::Internal)?;

    let user = db::users::create(&state.pool, name, email, &pw_hash, Role::User)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("User already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    let token = jwt::encode_token(&Claims::new(user.id, user.role), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;
    let jar = CookieJar::new().add(session_cookie(token, state.config.production));

    // Welcome mail is best effort: a send failure degrades the response to
    // success-with-warning, it never rolls the registration back.
    let mut message = "Registration Successful".to_string();
    if let Some(ref mailer) = state.mailer {
        if let Err(e) = mailer.send_welcome(&user.email, &user.name).await {
            tracing::warn!("Welcome email to {} failed: {e}", user.email);
            message =
                "Registration successful, but email sending failed. Contact support.".to_string();
        }
    }

    Ok((
        jar,
        Json(json!({ "success": true, "message": message, "userId": user.id })),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    let (Some(email), Some(pw)) = (required(&req.email), required(&req.password)) else {
        return Err(AppError::BadRequest(
            "Please fill all the fields".to_string(),
        ));
    };

    let user = db::users::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("No user found with this email.".to_string()))?;

    let valid = password::verify(pw, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid Password".to_string()));
    }

    let token = jwt::encode_token(&Claims::new(user.id, user.role), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;
    let jar = CookieJar::new().add(session_cookie(token.clone(), state.config.production));

    // The token also goes in the body so the SPA can use bearer auth.
    Ok((
        jar,
        Json(json!({
            "success": true,
            "message": "Login Successfully",
            "token": token,
            "role": user.role,
            "userId": user.id,
            "userData": PublicUser::from(&user),
        })),
    ))
}

/// Clears the client-held cookie. A previously issued bearer token stays
/// valid until it expires; there is no server-side revocation.
pub async fn logout() -> (CookieJar, Json<Value>) {
    let jar = CookieJar::new().add(clear_session_cookie());
    (
        jar,
        Json(json!({ "success": true, "message": "Logout Successfully" })),
    )
}

pub async fn send_verify_otp(
    State(state): State<SharedState>,
    Json(req): Json<SendVerifyOtpRequest>,
) -> Result<Json<Value>, AppError> {
    let Some(raw_id) = required(&req.user_id) else {
        return Err(AppError::BadRequest("User ID is required".to_string()));
    };
    let user_id = parse_user_id(raw_id)?;

    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.is_verified {
        return Err(AppError::Conflict("User is already verified".to_string()));
    }

    let code = otp::generate();
    db::users::set_verify_otp(&state.pool, user.id, &code, otp::expiry(Utc::now())).await?;

    match state.mailer {
        Some(ref mailer) => mailer
            .send_verify_otp(&user.email, &code)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send OTP email: {e}")))?,
        None => tracing::warn!(
            "System SMTP not configured. Verification OTP for {}: {code}",
            user.email
        ),
    }

    Ok(Json(
        json!({ "success": true, "message": "Verification OTP sent on Email" }),
    ))
}

pub async fn verify_email(
    State(state): State<SharedState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(raw_id), Some(code)) = (required(&req.user_id), required(&req.otp)) else {
        return Err(AppError::BadRequest("Missing Details".to_string()));
    };
    let user_id = parse_user_id(raw_id)?;

    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.is_verified {
        return Err(AppError::Conflict("User is already verified".to_string()));
    }

    otp::check(&user.verify_otp, user.verify_otp_expires_at, code, Utc::now())
        .map_err(|e| AppError::BadRequest(e.message().to_string()))?;

    db::users::mark_verified(&state.pool, user.id).await?;

    Ok(Json(
        json!({ "success": true, "message": "Account Verified Successfully" }),
    ))
}

/// Session probe used by the frontend to refresh local auth state.
pub async fn is_auth(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    Ok(Json(
        json!({ "success": true, "isUserVerified": user.is_verified }),
    ))
}

pub async fn send_reset_otp(
    State(state): State<SharedState>,
    Json(req): Json<SendResetOtpRequest>,
) -> Result<Json<Value>, AppError> {
    let Some(email) = required(&req.email) else {
        return Err(AppError::BadRequest("Email is required".to_string()));
    };

    let user = db::users::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let code = otp::generate();
    db::users::set_reset_otp(&state.pool, user.id, &code, otp::expiry(Utc::now())).await?;

    match state.mailer {
        Some(ref mailer) => mailer
            .send_reset_otp(&user.email, &code)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send OTP email: {e}")))?,
        None => tracing::warn!(
            "System SMTP not configured. Reset OTP for {}: {code}",
            user.email
        ),
    }

    Ok(Json(
        json!({ "success": true, "message": "Reset OTP sent on your Email" }),
    ))
}

pub async fn reset_password(
    State(state): State<SharedState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(email), Some(code), Some(new_pw)) = (
        required(&req.email),
        required(&req.otp),
        required(&req.new_password),
    ) else {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    };

    if new_pw.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    let user = db::users::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    otp::check(&user.reset_otp, user.reset_otp_expires_at, code, Utc::now())
        .map_err(|e| AppError::BadRequest(e.message().to_string()))?;

    let pw_hash = password::hash(new_pw).map_err(AppError::Internal)?;
    db::users::update_password_and_clear_reset(&state.pool, user.id, &pw_hash).await?;

    Ok(Json(
        json!({ "success": true, "message": "Password Reset Successfully" }),
    ))
}
