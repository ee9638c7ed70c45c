use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{feedback, PublicUser};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataQuery {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub feedback_text: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

pub async fn get_user_data(
    State(state): State<SharedState>,
    Query(q): Query<UserDataQuery>,
) -> Result<Json<Value>, AppError> {
    let raw_id = q
        .user_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("User ID is required".to_string()))?;
    let user_id = Uuid::parse_str(raw_id)
        .map_err(|_| AppError::BadRequest("Invalid user ID".to_string()))?;

    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(
        json!({ "success": true, "userData": PublicUser::from(&user) }),
    ))
}

/// A token can outlive its account by up to the token TTL; user-scoped
/// handlers re-check the row so a deleted user's session stops working.
async fn require_user_row(state: &SharedState, user_id: Uuid) -> Result<(), AppError> {
    db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;
    Ok(())
}

pub async fn submit_feedback(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> Result<Json<Value>, AppError> {
    require_user_row(&state, auth.user_id).await?;

    let (Some(text), Some(category), Some(priority)) = (
        req.feedback_text.as_deref().filter(|s| !s.is_empty()),
        req.category.as_deref().filter(|s| !s.is_empty()),
        req.priority.as_deref().filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Feedback text, category, and priority are required".to_string(),
        ));
    };

    if !feedback::CATEGORIES.contains(&category) {
        return Err(AppError::BadRequest(format!(
            "Invalid category. Valid options are: {}",
            feedback::CATEGORIES.join(", ")
        )));
    }
    if !feedback::PRIORITIES.contains(&priority) {
        return Err(AppError::BadRequest(format!(
            "Invalid priority. Valid options are: {}",
            feedback::PRIORITIES.join(", ")
        )));
    }

    let created =
        db::feedback::create(&state.pool, auth.user_id, text, category, priority).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Feedback submitted successfully",
        "feedback": created,
    })))
}

pub async fn user_feedback(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    require_user_row(&state, auth.user_id).await?;

    let feedbacks = db::feedback::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(json!({ "success": true, "feedbacks": feedbacks })))
}
