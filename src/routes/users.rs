use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{ERR_INVALID_ROLE, ERR_MISSING_FIELDS, ERR_NOTHING_TO_UPDATE};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Role, TeamUser, UserPatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// List all team members
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = db::users::list_users(&state.pool).await?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(users)))
}

/// Create a team member; role defaults to editor, active to true
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<TeamUser>> {
    let (Some(name), Some(email)) = (
        payload.name.filter(|n| !n.trim().is_empty()),
        payload.email.filter(|e| !e.trim().is_empty()),
    ) else {
        return Err(AppError::InvalidInput(ERR_MISSING_FIELDS.to_string()));
    };

    let role = match payload.role {
        None => Role::default(),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput(ERR_INVALID_ROLE.to_string()))?,
    };
    let active = payload.active.unwrap_or(true);

    let user = db::users::create_user(&state.pool, &name, &email, role.as_str(), active).await?;
    tracing::info!("Team user {} created", user.id);

    Ok(Json(user))
}

/// Partially update a team member
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<TeamUser>> {
    if patch.is_empty() {
        return Err(AppError::InvalidInput(ERR_NOTHING_TO_UPDATE.to_string()));
    }

    if let Some(role) = patch.role.as_deref() {
        role.parse::<Role>()
            .map_err(|_| AppError::InvalidInput(ERR_INVALID_ROLE.to_string()))?;
    }

    let user = db::users::update_user(&state.pool, id, &patch).await?;
    Ok(Json(user))
}

/// Delete a team member
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    db::users::delete_user(&state.pool, id).await?;
    Ok(Json(json!({ "ok": true })))
}
