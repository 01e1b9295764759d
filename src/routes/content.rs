use std::convert::Infallible;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::constants::{ERR_MISSING_BUNDLES, PUBLISH_RATE_LIMIT, PUBLISH_RATE_WINDOW_SECS};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::Locale;
use crate::security::{client_ip, is_unlocked};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    #[serde(default)]
    pub ar: Option<Value>,
    #[serde(default)]
    pub en: Option<Value>,
    #[serde(default)]
    pub design: Option<Value>,
}

/// Current published bundle, or null before the first publish
///
/// The public site renders from this single value; drafts never appear
/// here until an explicit publish succeeds.
pub async fn get_published_content(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let payload = db::content::get_published(&state.pool).await?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(payload.unwrap_or(Value::Null)),
    ))
}

/// Overwrite the published bundle from the operator's draft
///
/// Rate limited per caller IP, gated by the unlock cookie, and rejected
/// when either locale bundle is missing; the previous bundle survives any
/// failed attempt. Snapshot rows are best effort and never fail the
/// publish.
pub async fn publish_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PublishRequest>,
) -> Result<Json<Value>> {
    let ip = client_ip(&headers);
    let key = format!("content:publish:{}", ip);

    let decision = db::rate_limit::check(
        &state.pool,
        &key,
        PUBLISH_RATE_LIMIT,
        PUBLISH_RATE_WINDOW_SECS,
    )
    .await?;
    if !decision.ok {
        return Err(AppError::RateLimited {
            retry_after_secs: PUBLISH_RATE_WINDOW_SECS,
        });
    }

    if !is_unlocked(&headers) {
        return Err(AppError::Locked);
    }

    let (Some(ar), Some(en)) = (
        payload.ar.filter(|v| !v.is_null()),
        payload.en.filter(|v| !v.is_null()),
    ) else {
        return Err(AppError::InvalidInput(ERR_MISSING_BUNDLES.to_string()));
    };

    let data = json!({
        "ar": ar,
        "en": en,
        "design": payload.design.unwrap_or(Value::Null),
        "updatedAt": Utc::now().to_rfc3339(),
    });

    db::content::set_published(&state.pool, &data).await?;

    // Best-effort snapshots; a failure here must not fail the publish
    let _ = db::content::insert_snapshot(&state.pool, Locale::Ar, &data["ar"]).await;
    let _ = db::content::insert_snapshot(&state.pool, Locale::En, &data["en"]).await;

    state.publish.notify();
    tracing::info!("Published content bundle from {}", ip);

    Ok(Json(json!({ "ok": true })))
}

/// Live publish feed
///
/// Emits one event per publish; clients react by refetching the published
/// bundle, so missed or duplicated events are harmless.
pub async fn publish_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.publish.subscribe()).filter_map(|msg| {
        // A lagged receiver just waits for the next publish
        msg.ok()
            .map(|event| Ok(Event::default().event("published").data(event.ts.to_string())))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
