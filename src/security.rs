use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::constants::UNLOCK_COOKIE;

type HmacSha256 = Hmac<Sha256>;

// =============================================================================
// Shared dashboard password
// =============================================================================

/// Hash the shared dashboard password for storage (SHA-256 hex)
///
/// This is a single shared secret gating the dashboard, not per-user
/// authentication; the stored value lives in the settings table under a
/// fixed key.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a submitted password against the stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}

// =============================================================================
// Keyed digests (ip/ua on review rows)
// =============================================================================

/// HMAC-SHA256 digest of a request attribute, keyed with the app secret
///
/// Review rows keep ip/ua digests instead of raw values so the table alone
/// cannot identify submitters.
pub fn keyed_digest(value: &str, secret: &str) -> String {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            tracing::error!("Failed to create HMAC instance");
            return String::new();
        }
    };
    mac.update(value.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

// =============================================================================
// Gate cookie
// =============================================================================

/// Check whether the unlock cookie is present on the request
///
/// Every gated endpoint re-checks this independently; there is no session
/// store behind the flag.
pub fn is_unlocked(headers: &HeaderMap) -> bool {
    let Some(cookie_header) = headers.get("cookie").and_then(|v| v.to_str().ok()) else {
        return false;
    };

    cookie_header.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(UNLOCK_COOKIE) && parts.next() == Some("1")
    })
}

/// Build the Set-Cookie value for a successful unlock
pub fn unlock_cookie(max_age_secs: i64) -> String {
    format!(
        "{}=1; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
        UNLOCK_COOKIE, max_age_secs
    )
}

/// Extract the client IP from X-Forwarded-For, falling back to "unknown"
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

/// Extract the client user agent, falling back to "unknown"
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
