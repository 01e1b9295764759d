use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{
    ADMIN_REVIEWS_LIMIT, ERR_BAD_STATUS, ERR_INVALID_REVIEW, ERR_SPAM_DETECTED,
    REVIEWS_DEFAULT_PAGE_SIZE, REVIEWS_MAX_PAGE_SIZE,
};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::review::validate_submission;
use crate::models::{NewReview, ReviewStatus};
use crate::security::{client_ip, is_unlocked, keyed_digest, user_agent};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Honeypot; humans never see this field, bots fill it
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModerateRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Public listing: approved reviews plus the aggregate summary
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(REVIEWS_DEFAULT_PAGE_SIZE)
        .clamp(1, REVIEWS_MAX_PAGE_SIZE);

    let (items, summary) = db::reviews::list_approved(&state.pool, page, page_size).await?;

    Ok((
        [(header::CACHE_CONTROL, "public, max-age=30")],
        Json(json!({ "items": items, "summary": summary })),
    ))
}

/// Public submission; always lands as pending
pub async fn submit_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<Value>> {
    // Known leak, kept as built: the explicit rejection tells a prober the
    // honeypot exists
    if payload
        .website
        .as_deref()
        .is_some_and(|w| !w.trim().is_empty())
    {
        return Err(AppError::InvalidInput(ERR_SPAM_DETECTED.to_string()));
    }

    let name = payload.name.unwrap_or_default();
    let comment = payload.comment.unwrap_or_default();
    let rating = payload.rating.unwrap_or(0);
    if !validate_submission(&name, &comment, rating) {
        return Err(AppError::InvalidInput(ERR_INVALID_REVIEW.to_string()));
    }

    let secret = &state.config.app_secret_key;
    let review = NewReview {
        name,
        email_enc: payload
            .email
            .filter(|e| !e.trim().is_empty())
            .map(|e| keyed_digest(&e, secret)),
        rating: rating as i32,
        comment,
        ip_hash: keyed_digest(&client_ip(&headers), secret),
        ua_hash: keyed_digest(&user_agent(&headers), secret),
    };

    let id = db::reviews::create_review(&state.pool, &review).await?;
    tracing::info!("Review {} submitted, pending moderation", id);

    Ok(Json(json!({ "ok": true, "id": id, "status": "pending" })))
}

/// Admin listing: every review regardless of status
pub async fn admin_list_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    if !is_unlocked(&headers) {
        return Err(AppError::Locked);
    }

    let rows = db::reviews::list_all(&state.pool, ADMIN_REVIEWS_LIMIT).await?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(rows)))
}

/// Approve or reject a pending review
pub async fn moderate_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<ModerateRequest>,
) -> Result<Json<Value>> {
    if !is_unlocked(&headers) {
        return Err(AppError::Locked);
    }

    let status = payload
        .status
        .as_deref()
        .and_then(ReviewStatus::parse_moderation)
        .ok_or_else(|| AppError::InvalidInput(ERR_BAD_STATUS.to_string()))?;

    db::reviews::moderate(&state.pool, id, status).await?;

    Ok(Json(json!({ "ok": true })))
}
