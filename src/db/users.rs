use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::{TeamUser, UserPatch};

/// Every team member, newest first
pub async fn list_users(pool: &PgPool) -> Result<Vec<TeamUser>> {
    let rows: Vec<TeamUser> = sqlx::query_as(
        "SELECT id, name, email, role, active, created_at FROM users ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a team member and return the created row
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: &str,
    active: bool,
) -> Result<TeamUser> {
    let user: TeamUser = sqlx::query_as(
        "INSERT INTO users (name, email, role, active) VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, role, active, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(active)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Apply a partial update; absent fields keep their current value
pub async fn update_user(pool: &PgPool, id: i64, patch: &UserPatch) -> Result<TeamUser> {
    let user: Option<TeamUser> = sqlx::query_as(
        "UPDATE users SET \
             name = COALESCE($2, name), \
             email = COALESCE($3, email), \
             role = COALESCE($4, role), \
             active = COALESCE($5, active) \
         WHERE id = $1 \
         RETURNING id, name, email, role, active, created_at",
    )
    .bind(id)
    .bind(&patch.name)
    .bind(&patch.email)
    .bind(&patch.role)
    .bind(patch.active)
    .fetch_optional(pool)
    .await?;

    user.ok_or(AppError::NotFound)
}

/// Remove a team member row
pub async fn delete_user(pool: &PgPool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// First admin, else first user at all; the dashboard shows this as the
/// current operator
pub async fn find_operator(pool: &PgPool) -> Result<Option<TeamUser>> {
    let admin: Option<TeamUser> = sqlx::query_as(
        "SELECT id, name, email, role, active, created_at FROM users \
         WHERE role = 'admin' ORDER BY id ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    if admin.is_some() {
        return Ok(admin);
    }

    let any: Option<TeamUser> = sqlx::query_as(
        "SELECT id, name, email, role, active, created_at FROM users ORDER BY id ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(any)
}
