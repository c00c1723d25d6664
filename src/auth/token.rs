//! Bearer token expiry validation.
//!
//! The platform issues JWT-shaped tokens; the client only reads the embedded
//! `exp` claim to decide whether a stored token is worth presenting. No
//! signature check happens client-side — the server re-verifies every call.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the `exp` claim (seconds since the Unix epoch) from a JWT-shaped
/// token.
///
/// Returns `None` for anything malformed: wrong segment count, invalid
/// base64, a non-JSON payload, or a missing/non-numeric `exp`.
#[must_use]
pub fn decode_expiry(token: &str) -> Option<f64> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_f64()
}

/// Check a token against an explicit clock. Pure: a token is valid when it
/// decodes and its expiry is strictly in the future.
#[must_use]
pub fn is_valid_at(token: &str, now_secs: f64) -> bool {
    decode_expiry(token).is_some_and(|exp| exp > now_secs)
}

/// Check a token against the current wall clock.
#[must_use]
pub fn is_valid(token: &str) -> bool {
    is_valid_at(token, now_secs())
}

/// Current time in seconds since the Unix epoch.
fn now_secs() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}
