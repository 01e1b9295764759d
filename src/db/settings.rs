use serde_json::Value;
use sqlx::PgPool;

use crate::error::Result;

/// Read one settings value by key
pub async fn get_setting(pool: &PgPool, key: &str) -> Result<Option<Value>> {
    let row: Option<(Value,)> =
        sqlx::query_as("SELECT value FROM settings WHERE key = $1 LIMIT 1")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(value,)| value))
}

/// Upsert one settings value by key
pub async fn set_setting(pool: &PgPool, key: &str, value: &Value) -> Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}
