use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const CATEGORIES: &[&str] = &["Bug", "Feature Request", "General", "Other"];
pub const PRIORITIES: &[&str] = &["Low", "Medium", "High"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Uuid,
    pub feedback_text: String,
    pub category: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

/// Feedback joined with its submitter. The author columns are COALESCEd so
/// rows whose user was deleted still render.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWithAuthor {
    pub id: Uuid,
    pub feedback_text: String,
    pub category: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}
