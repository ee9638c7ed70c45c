use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CategoryCount, Feedback, FeedbackWithAuthor};

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    feedback_text: &str,
    category: &str,
    priority: &str,
) -> Result<Feedback, sqlx::Error> {
    sqlx::query_as::<_, Feedback>(
        "INSERT INTO feedback (user_id, feedback_text, category, priority)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(user_id)
    .bind(feedback_text)
    .bind(category)
    .bind(priority)
    .fetch_one(pool)
    .await
}

pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Feedback>, sqlx::Error> {
    sqlx::query_as::<_, Feedback>(
        "SELECT * FROM feedback WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Paginated listing joined with the submitter. LEFT JOIN plus COALESCE so
/// feedback from deleted users still lists.
pub async fn list_with_authors(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<FeedbackWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, FeedbackWithAuthor>(
        "SELECT f.id, f.feedback_text, f.category, f.priority, f.created_at,
                COALESCE(u.name, 'Unknown User') AS user_name,
                COALESCE(u.email, '') AS user_email
         FROM feedback f
         LEFT JOIN users u ON u.id = f.user_id
         ORDER BY f.created_at DESC
         LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM feedback")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn count_by_category(pool: &PgPool) -> Result<Vec<CategoryCount>, sqlx::Error> {
    sqlx::query_as::<_, CategoryCount>(
        "SELECT category, COUNT(*) AS count FROM feedback GROUP BY category ORDER BY count DESC",
    )
    .fetch_all(pool)
    .await
}
