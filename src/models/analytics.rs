use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

/// One synthetic analytics row, keyed by day
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DailyStat {
    pub day: NaiveDate,
    pub visitors: i32,
    pub leads: i32,
    pub orders: i32,
    pub conversion_rate: f64,
}

/// Generate one day of synthetic traffic
///
/// Visitors 400..=1000, leads at 4-7% of visitors, orders at 35-50% of
/// leads, conversion as a percentage rounded to two decimals.
pub fn synthesize_day(rng: &mut impl Rng, day: NaiveDate) -> DailyStat {
    let visitors = 400 + rng.gen_range(0..=600);
    let leads = (visitors as f64 * rng.gen_range(0.04..=0.07)).round() as i32;
    let orders = (leads as f64 * rng.gen_range(0.35..=0.50)).round() as i32;
    let conversion_rate = ((orders as f64 / visitors as f64) * 100.0 * 100.0).round() / 100.0;

    DailyStat {
        day,
        visitors,
        leads,
        orders,
        conversion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_day_ranges() {
        let mut rng = rand::thread_rng();
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        for _ in 0..200 {
            let stat = synthesize_day(&mut rng, day);
            assert!((400..=1000).contains(&stat.visitors));
            assert!(stat.leads <= stat.visitors);
            assert!(stat.orders <= stat.leads);
            assert!(stat.conversion_rate >= 0.0);
            assert!(stat.conversion_rate <= 100.0);
            // two-decimal rounding
            let scaled = stat.conversion_rate * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_synthesize_day_keeps_day() {
        let mut rng = rand::thread_rng();
        let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(synthesize_day(&mut rng, day).day, day);
    }
}
