use serde_json::Value;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::Locale;

/// Read the single live published bundle, if any has been published yet
pub async fn get_published(pool: &PgPool) -> Result<Option<Value>> {
    let row: Option<(Value,)> =
        sqlx::query_as("SELECT data FROM published_content WHERE id = 1")
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(data,)| data))
}

/// Overwrite the live bundle wholesale
///
/// Last write wins; there is no optimistic concurrency token.
pub async fn set_published(pool: &PgPool, data: &Value) -> Result<()> {
    sqlx::query(
        "INSERT INTO published_content (id, data, updated_at) VALUES (1, $1, NOW()) \
         ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()",
    )
    .bind(data)
    .execute(pool)
    .await?;

    Ok(())
}

/// Append one historical snapshot row for a locale
///
/// Callers treat this as best effort and swallow failures; a lost snapshot
/// never fails the publish itself.
pub async fn insert_snapshot(pool: &PgPool, locale: Locale, content: &Value) -> Result<()> {
    sqlx::query("INSERT INTO content_snapshots (locale, content) VALUES ($1, $2)")
        .bind(locale.as_str())
        .bind(content)
        .execute(pool)
        .await?;

    Ok(())
}
