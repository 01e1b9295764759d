use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::constants::{
    ADMIN_PASSWORD_KEY, ERR_INVALID_PASSWORD, MIN_PASSWORD_CHARS, UNLOCK_COOKIE_MAX_AGE_SECS,
    UNLOCK_RATE_LIMIT, UNLOCK_RATE_WINDOW_SECS,
};
use crate::db;
use crate::error::{AppError, Result};
use crate::security::{client_ip, hash_password, is_unlocked, unlock_cookie, verify_password};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    #[serde(default)]
    pub password: String,
}

/// Unlock the dashboard with the shared password
///
/// First unlock on a fresh install stores the submitted password as the
/// shared secret; every later attempt is compared against that hash.
/// Success sets the long-lived flag cookie the gated endpoints check.
pub async fn unlock_gate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UnlockRequest>,
) -> Result<impl IntoResponse> {
    let ip = client_ip(&headers);
    let key = format!("gate:unlock:{}", ip);

    let decision = db::rate_limit::check(
        &state.pool,
        &key,
        UNLOCK_RATE_LIMIT,
        UNLOCK_RATE_WINDOW_SECS,
    )
    .await?;
    if !decision.ok {
        return Err(AppError::RateLimited {
            retry_after_secs: UNLOCK_RATE_WINDOW_SECS,
        });
    }

    if payload.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::InvalidInput(ERR_INVALID_PASSWORD.to_string()));
    }

    let stored = db::settings::get_setting(&state.pool, ADMIN_PASSWORD_KEY)
        .await?
        .and_then(|value| {
            value
                .get("hash")
                .and_then(|h| h.as_str())
                .map(str::to_string)
        });

    let ok = match stored {
        None => {
            // First-run bootstrap: the submitted password becomes the secret
            let hash = hash_password(&payload.password);
            db::settings::set_setting(&state.pool, ADMIN_PASSWORD_KEY, &json!({ "hash": hash }))
                .await?;
            tracing::info!("Dashboard password initialized");
            true
        }
        Some(hash) => verify_password(&payload.password, &hash),
    };

    if !ok {
        tracing::warn!("Failed unlock attempt from {}", ip);
        return Err(AppError::WrongPassword);
    }

    Ok((
        [(
            header::SET_COOKIE,
            unlock_cookie(UNLOCK_COOKIE_MAX_AGE_SECS),
        )],
        Json(json!({ "ok": true })),
    ))
}

/// Report whether the gate cookie is set on this request
pub async fn gate_status(headers: HeaderMap) -> Json<serde_json::Value> {
    Json(json!({ "unlocked": is_unlocked(&headers) }))
}
