use axum::{http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::constants::CONTACT_SIMULATED_DELAY_MS;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Simulated contact form
///
/// Nothing is persisted or delivered; the handler only validates and
/// answers after a short artificial delay.
pub async fn submit_contact(Json(payload): Json<ContactRequest>) -> (StatusCode, Json<Value>) {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    if !filled(&payload.name) || !filled(&payload.email) || !filled(&payload.message) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Missing fields" })),
        );
    }

    tokio::time::sleep(Duration::from_millis(CONTACT_SIMULATED_DELAY_MS)).await;

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Thanks! We'll get back to you soon."
        })),
    )
}
