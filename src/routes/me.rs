use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};

use crate::db;
use crate::error::{AppError, Result};
use crate::security::is_unlocked;
use crate::AppState;

/// Current-operator lookup for the dashboard shell
///
/// The gate is the only identity there is, so this returns the first
/// admin-role team member, else the first team member, else a placeholder
/// for a fresh install.
pub async fn current_operator(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    if !is_unlocked(&headers) {
        return Err(AppError::Locked);
    }

    let user = match db::users::find_operator(&state.pool).await? {
        Some(user) => json!({
            "id": user.id.to_string(),
            "name": user.name,
            "email": user.email,
            "role": user.role,
            "active": user.active,
        }),
        None => json!({
            "id": "0",
            "name": "Admin",
            "email": "admin@example.com",
            "role": "admin",
            "active": true,
        }),
    };

    Ok(Json(json!({ "user": user })))
}
