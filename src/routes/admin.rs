use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{PublicUser, Role};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AddUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub secret_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFeedbackQuery {
    pub view_type: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ── Admin routes (admin or superadmin) ──────────────────────────

pub async fn dashboard(auth: AuthUser) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;
    Ok(Json(json!({
        "success": true,
        "message": "Welcome to the Admin Dashboard!",
    })))
}

pub async fn manage_users(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    let users: Vec<PublicUser> = db::users::list_by_role(&state.pool, Role::User)
        .await?
        .iter()
        .map(PublicUser::from)
        .collect();

    Ok(Json(json!({ "success": true, "users": users })))
}

pub async fn manage_admins(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    let admins: Vec<PublicUser> = db::users::list_by_role(&state.pool, Role::Admin)
        .await?
        .iter()
        .map(PublicUser::from)
        .collect();

    Ok(Json(json!({ "success": true, "admins": admins })))
}

pub async fn view_feedback(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(q): Query<ViewFeedbackQuery>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    if q.view_type.as_deref() == Some("cards") {
        let counts = db::feedback::count_by_category(&state.pool).await?;
        return Ok(Json(
            json!({ "success": true, "feedbackCountByCategory": counts }),
        ));
    }

    let page = q.page.unwrap_or(1).max(1);
    let per_page = q.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let feedbacks = db::feedback::list_with_authors(&state.pool, per_page, offset).await?;
    let total = db::feedback::count_all(&state.pool).await?;
    let total_pages = (total + per_page - 1) / per_page;

    Ok(Json(json!({
        "success": true,
        "feedbacks": feedbacks,
        "total": total,
        "page": page,
        "totalPages": total_pages,
    })))
}

/// The admin-facing path can only ever create role=user accounts. Admins
/// are created through the superadmin route below.
pub async fn add_user(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    let (Some(name), Some(email), Some(pw)) = (
        required(&req.name),
        required(&req.email),
        required(&req.password),
    ) else {
        return Err(AppError::BadRequest(
            "Please fill all the fields".to_string(),
        ));
    };

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

    Ok(Json(json!({
        "success": true,
        "message": "User added successfully",
        "user": PublicUser::from(&user),
    })))
}

pub async fn update_user(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let pw_hash = match required(&req.password) {
        Some(pw) => {
            if pw.len() < 6 {
                return Err(AppError::BadRequest(
                    "Password must be at least 6 characters long".to_string(),
                ));
            }
            Some(password::hash(pw).map_err(AppError::Internal)?)
        }
        None => None,
    };

    let user = db::users::update_profile(
        &state.pool,
        user_id,
        required(&req.name),
        required(&req.email),
        pw_hash.as_deref(),
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "message": "User updated successfully",
        "user": PublicUser::from(&user),
    })))
}

pub async fn delete_user(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    auth.require_admin()?;

    db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Hard delete; the user's feedback rows stay behind and list with a
    // fallback author.
    db::users::delete(&state.pool, user_id).await?;

    Ok(Json(
        json!({ "success": true, "message": "User deleted successfully" }),
    ))
}

// ── Superadmin routes ───────────────────────────────────────────

pub async fn super_dashboard(auth: AuthUser) -> Result<Json<Value>, AppError> {
    auth.require_superadmin()?;
    Ok(Json(json!({
        "success": true,
        "message": "Welcome to the Super Admin Dashboard!",
    })))
}

pub async fn create_admin(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateAdminRequest>,
) -> Result<Json<Value>, AppError> {
    auth.require_superadmin()?;

    // Secret code is checked before any other work, so a failed attempt
    // leaves no side effect (nothing hashed, nothing written).
    if required(&req.secret_code) != Some(state.config.secret_code.as_str()) {
        return Err(AppError::Forbidden("Invalid Secret Code".to_string()));
    }

    let (Some(name), Some(email), Some(pw)) = (
        required(&req.name),
        required(&req.email),
        required(&req.password),
    ) else {
        return Err(AppError::BadRequest(
            "Please fill all the fields".to_string(),
        ));
    };

    if pw.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    if db::users::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Conflict("Admin Already Exists".to_string()));
    }

    let pw_hash = password::hash(pw).map_err(AppError::Internal)?;
    let admin = db::users::create(&state.pool, name, email, &pw_hash, Role::Admin)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Admin Already Exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok(Json(json!({
        "success": true,
        "message": "Admin Created Successfully",
        "admin": PublicUser::from(&admin),
    })))
}

pub async fn update_admin(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(admin_id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<Value>, AppError> {
    auth.require_superadmin()?;

    db::users::find_by_id_and_role(&state.pool, admin_id, Role::Admin)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

    let pw_hash = match required(&req.password) {
        Some(pw) => {
            if pw.len() < 6 {
                return Err(AppError::BadRequest(
                    "Password must be at least 6 characters long".to_string(),
                ));
            }
            Some(password::hash(pw).map_err(AppError::Internal)?)
        }
        None => None,
    };

    let admin = db::users::update_profile(
        &state.pool,
        admin_id,
        required(&req.name),
        required(&req.email),
        pw_hash.as_deref(),
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Admin updated successfully",
        "admin": PublicUser::from(&admin),
    })))
}

pub async fn delete_admin(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(admin_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    auth.require_superadmin()?;

    db::users::find_by_id_and_role(&state.pool, admin_id, Role::Admin)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

    db::users::delete(&state.pool, admin_id).await?;

    Ok(Json(
        json!({ "success": true, "message": "Admin deleted successfully" }),
    ))
}
