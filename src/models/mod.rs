pub mod analytics;
pub mod content;
pub mod rate_limit;
pub mod review;
pub mod user;

pub use analytics::DailyStat;
pub use content::Locale;
pub use rate_limit::RateLimitDecision;
pub use review::{NewReview, PublicReview, Review, ReviewStatus, ReviewSummary};
pub use user::{Role, TeamUser, UserPatch};
