use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::{NewReview, PublicReview, Review, ReviewStatus, ReviewSummary};

/// Insert a public submission as a pending review, returning its id
pub async fn create_review(pool: &PgPool, review: &NewReview) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO reviews (name, email_enc, rating, comment, status, ip_hash, ua_hash) \
         VALUES ($1, $2, $3, $4, 'pending', $5, $6) RETURNING id",
    )
    .bind(&review.name)
    .bind(&review.email_enc)
    .bind(review.rating)
    .bind(&review.comment)
    .bind(&review.ip_hash)
    .bind(&review.ua_hash)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Approved reviews for the public listing, newest first
pub async fn list_approved(
    pool: &PgPool,
    page: i64,
    page_size: i64,
) -> Result<(Vec<PublicReview>, ReviewSummary)> {
    let items: Vec<PublicReview> = sqlx::query_as(
        "SELECT id, name, rating, comment, created_at FROM reviews \
         WHERE status = 'approved' ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(page_size)
    .bind((page - 1) * page_size)
    .fetch_all(pool)
    .await?;

    let (count, average): (i64, f64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(AVG(rating), 0)::FLOAT8 FROM reviews \
         WHERE status = 'approved'",
    )
    .fetch_one(pool)
    .await?;

    Ok((items, ReviewSummary { average, count }))
}

/// Every review regardless of status, newest first, for the admin listing
pub async fn list_all(pool: &PgPool, limit: i64) -> Result<Vec<Review>> {
    let rows: Vec<Review> = sqlx::query_as(
        "SELECT id, name, email_enc, rating, comment, status, ip_hash, ua_hash, created_at \
         FROM reviews ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Move a pending review to approved or rejected
///
/// Approved and rejected are terminal; the update matches pending rows
/// only, so re-moderation surfaces as a conflict instead of silently
/// rewriting history.
pub async fn moderate(pool: &PgPool, id: i64, status: ReviewStatus) -> Result<()> {
    let current: Option<(String,)> =
        sqlx::query_as("SELECT status FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match current.as_ref().map(|(s,)| s.as_str()) {
        None => return Err(AppError::NotFound),
        Some("pending") => {}
        Some(_) => return Err(AppError::AlreadyModerated),
    }

    let result = sqlx::query("UPDATE reviews SET status = $2 WHERE id = $1 AND status = 'pending'")
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;

    // A concurrent moderation may have won between the read and the update
    if result.rows_affected() == 0 {
        return Err(AppError::AlreadyModerated);
    }

    tracing::info!("Review {} moderated to {}", id, status);
    Ok(())
}
