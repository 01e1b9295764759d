use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::error::Result;
use crate::models::analytics::synthesize_day;
use crate::models::DailyStat;

/// All daily rows, oldest first
pub async fn list_daily(pool: &PgPool) -> Result<Vec<DailyStat>> {
    let rows: Vec<DailyStat> = sqlx::query_as(
        "SELECT day, visitors, leads, orders, conversion_rate::FLOAT8 AS conversion_rate \
         FROM analytics_daily ORDER BY day ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Regenerate the trailing `days` rows with synthetic values, upserted by day
pub async fn regenerate(pool: &PgPool, days: i64) -> Result<()> {
    let today = Utc::now().date_naive();

    let stats: Vec<DailyStat> = {
        let mut rng = rand::thread_rng();
        (0..days)
            .rev()
            .map(|i| synthesize_day(&mut rng, today - Duration::days(i)))
            .collect()
    };

    for stat in stats {
        sqlx::query(
            "INSERT INTO analytics_daily (day, visitors, leads, orders, conversion_rate) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (day) DO UPDATE SET \
                 visitors = EXCLUDED.visitors, \
                 leads = EXCLUDED.leads, \
                 orders = EXCLUDED.orders, \
                 conversion_rate = EXCLUDED.conversion_rate",
        )
        .bind(stat.day)
        .bind(stat.visitors)
        .bind(stat.leads)
        .bind(stat.orders)
        .bind(stat.conversion_rate)
        .execute(pool)
        .await?;
    }

    Ok(())
}
