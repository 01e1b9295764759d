/// Cookie set by a successful gate unlock
pub const UNLOCK_COOKIE: &str = "dash_unlock";

/// Unlock cookie lifetime (7 days)
pub const UNLOCK_COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 3600;

/// Settings key holding the shared dashboard password hash
pub const ADMIN_PASSWORD_KEY: &str = "admin_password_hash";

/// Minimum accepted dashboard password length (characters)
pub const MIN_PASSWORD_CHARS: usize = 4;

/// Gate unlock rate limit: 10 attempts per minute per IP
pub const UNLOCK_RATE_LIMIT: i64 = 10;
pub const UNLOCK_RATE_WINDOW_SECS: i64 = 60;

/// Publish rate limit: 30 publishes per 5 minutes per IP
pub const PUBLISH_RATE_LIMIT: i64 = 30;
pub const PUBLISH_RATE_WINDOW_SECS: i64 = 300;

/// Public review listing page size bounds
pub const REVIEWS_DEFAULT_PAGE_SIZE: i64 = 10;
pub const REVIEWS_MAX_PAGE_SIZE: i64 = 20;

/// Admin review listing row cap
pub const ADMIN_REVIEWS_LIMIT: i64 = 200;

/// Days regenerated by the analytics endpoint when unspecified
pub const ANALYTICS_DEFAULT_DAYS: i64 = 14;

/// Simulated processing delay for the contact form
pub const CONTACT_SIMULATED_DELAY_MS: u64 = 600;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a too-short dashboard password
pub const ERR_INVALID_PASSWORD: &str = "Invalid password";

/// Error message for a non-empty review honeypot field
pub const ERR_SPAM_DETECTED: &str = "Spam detected";

/// Error message for an invalid public review submission
pub const ERR_INVALID_REVIEW: &str = "Missing or invalid fields";

/// Error message for a publish payload missing a locale bundle
pub const ERR_MISSING_BUNDLES: &str = "Missing ar/en bundles";

/// Error message for a moderation target outside approved/rejected
pub const ERR_BAD_STATUS: &str = "Bad status";

/// Error message for a user create without name or email
pub const ERR_MISSING_FIELDS: &str = "Missing fields";

/// Error message for a user update with an empty patch
pub const ERR_NOTHING_TO_UPDATE: &str = "Nothing to update";

/// Error message for an unknown team-user role
pub const ERR_INVALID_ROLE: &str = "Invalid role";
