use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::ANALYTICS_DEFAULT_DAYS;
use crate::db;
use crate::error::Result;
use crate::models::DailyStat;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    #[serde(default)]
    pub days: Option<i64>,
}

/// All synthetic daily rows, oldest first
pub async fn list_analytics(State(state): State<AppState>) -> Result<Json<Vec<DailyStat>>> {
    let rows = db::analytics::list_daily(&state.pool).await?;
    Ok(Json(rows))
}

/// Regenerate the trailing N days of synthetic rows
///
/// The body is optional; a missing or empty one regenerates the default
/// two weeks.
pub async fn regenerate_analytics(
    State(state): State<AppState>,
    payload: Option<Json<RegenerateRequest>>,
) -> Result<Json<Value>> {
    let days = payload
        .and_then(|Json(p)| p.days)
        .unwrap_or(ANALYTICS_DEFAULT_DAYS);

    db::analytics::regenerate(&state.pool, days).await?;
    tracing::info!("Regenerated {} days of analytics", days);

    Ok(Json(json!({ "ok": true })))
}
