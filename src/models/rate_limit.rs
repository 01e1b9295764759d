use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Outcome of a rate-limit check for one key
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitDecision {
    pub ok: bool,
    pub remaining: i64,
    pub reset: DateTime<Utc>,
}

impl RateLimitDecision {
    /// Decide from the number of attempts recorded within the window
    ///
    /// The count includes the attempt just inserted, so a key gets exactly
    /// `limit` allowed requests per window before denials start.
    pub fn from_count(count: i64, limit: i64, now: DateTime<Utc>, window_secs: i64) -> Self {
        RateLimitDecision {
            ok: count <= limit,
            remaining: (limit - count).max(0),
            reset: now + Duration::seconds(window_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit_inclusive() {
        let now = Utc::now();
        for count in 1..=10 {
            assert!(RateLimitDecision::from_count(count, 10, now, 60).ok);
        }
        assert!(!RateLimitDecision::from_count(11, 10, now, 60).ok);
    }

    #[test]
    fn test_remaining_never_negative() {
        let now = Utc::now();
        let decision = RateLimitDecision::from_count(15, 10, now, 60);
        assert_eq!(decision.remaining, 0);

        let decision = RateLimitDecision::from_count(3, 10, now, 60);
        assert_eq!(decision.remaining, 7);
    }

    #[test]
    fn test_reset_is_window_from_now() {
        let now = Utc::now();
        let decision = RateLimitDecision::from_count(1, 10, now, 300);
        assert_eq!(decision.reset, now + Duration::seconds(300));
    }
}
