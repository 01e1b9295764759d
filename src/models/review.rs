use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation state of a review
///
/// Creation always lands in `Pending`; `Approved` and `Rejected` are
/// terminal, there is no path back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Whether no further moderation may change this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }

    /// Parse a moderation target; only approved/rejected are valid targets
    pub fn parse_moderation(value: &str) -> Option<ReviewStatus> {
        match value {
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full review row, as seen by the admin listing
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub email_enc: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub status: String,
    pub ip_hash: Option<String>,
    pub ua_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection of an approved review (no email or request digests)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PublicReview {
    pub id: i64,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate over the approved reviews
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub average: f64,
    pub count: i64,
}

/// A validated public submission, ready to insert as `pending`
#[derive(Debug, Clone)]
pub struct NewReview {
    pub name: String,
    pub email_enc: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub ip_hash: String,
    pub ua_hash: String,
}

/// Validate the user-supplied parts of a review submission
pub fn validate_submission(name: &str, comment: &str, rating: i64) -> bool {
    !name.trim().is_empty() && !comment.trim().is_empty() && (1..=5).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moderation_targets() {
        assert_eq!(
            ReviewStatus::parse_moderation("approved"),
            Some(ReviewStatus::Approved)
        );
        assert_eq!(
            ReviewStatus::parse_moderation("rejected"),
            Some(ReviewStatus::Rejected)
        );
        // pending is never a valid moderation target
        assert_eq!(ReviewStatus::parse_moderation("pending"), None);
        assert_eq!(ReviewStatus::parse_moderation("deleted"), None);
        assert_eq!(ReviewStatus::parse_moderation(""), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReviewStatus::Pending.is_terminal());
        assert!(ReviewStatus::Approved.is_terminal());
        assert!(ReviewStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ReviewStatus>(), Ok(status));
        }
        assert!("bogus".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_validate_submission() {
        assert!(validate_submission("A", "Great", 5));
        assert!(validate_submission("Omar", "Fast delivery", 1));

        assert!(!validate_submission("", "Great", 5));
        assert!(!validate_submission("   ", "Great", 5));
        assert!(!validate_submission("A", "", 5));
        assert!(!validate_submission("A", "Great", 0));
        assert!(!validate_submission("A", "Great", 6));
        assert!(!validate_submission("A", "Great", -3));
    }
}
