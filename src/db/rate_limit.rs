use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::error::Result;
use crate::models::RateLimitDecision;

/// Record one attempt for the key and decide allow/deny
///
/// The insert and the count are separate statements; two concurrent
/// requests can both pass near the limit. Acceptable for this traffic
/// profile.
pub async fn check(
    pool: &PgPool,
    key: &str,
    limit: i64,
    window_secs: i64,
) -> Result<RateLimitDecision> {
    let now = Utc::now();
    let window_start = now - Duration::seconds(window_secs);

    sqlx::query("INSERT INTO rate_limits (key, ts) VALUES ($1, NOW())")
        .bind(key)
        .execute(pool)
        .await?;

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM rate_limits WHERE key = $1 AND ts >= $2")
            .bind(key)
            .bind(window_start)
            .fetch_one(pool)
            .await?;

    // Opportunistic sweep of stale rows; best effort on every call, there
    // is no dedicated job.
    if let Err(e) = sqlx::query("DELETE FROM rate_limits WHERE ts < NOW() - INTERVAL '2 days'")
        .execute(pool)
        .await
    {
        tracing::debug!("Rate limit sweep failed: {}", e);
    }

    let decision = RateLimitDecision::from_count(count, limit, now, window_secs);
    if !decision.ok {
        tracing::warn!("Rate limit exceeded for key {}: {} attempts", key, count);
    }

    Ok(decision)
}
