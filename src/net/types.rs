//! Wire types for the platform REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Server-defined user profile.
///
/// The client treats the profile as an opaque payload and only peeks at a
/// few well-known fields through accessors; everything else passes through
/// untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

impl User {
    /// Display name, if the server provided one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.0.get("name").and_then(serde_json::Value::as_str)
    }

    /// Account role, if the server provided one.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(serde_json::Value::as_str)
    }

    /// Whether this account may enter the instructor area.
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        self.role() == Some("instructor")
    }
}

/// Raw login/register response envelope.
///
/// The API signals application-level rejection with `success: false` (and an
/// optional message) while still returning HTTP 200.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEnvelope {
    #[serde(default)]
    pub success: bool,
    pub access_token: Option<String>,
    pub user: Option<User>,
    pub message: Option<String>,
}

/// A usable authentication result: token plus profile.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: User,
}

impl TryFrom<AuthEnvelope> for AuthPayload {
    type Error = ApiError;

    /// Surface a declared failure (`success: false`) as
    /// [`ApiError::Rejected`] rather than swallowing it.
    fn try_from(envelope: AuthEnvelope) -> Result<Self, ApiError> {
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "request rejected".to_owned());
            return Err(ApiError::Rejected(message));
        }
        match (envelope.access_token, envelope.user) {
            (Some(access_token), Some(user)) => Ok(Self { access_token, user }),
            _ => Err(ApiError::Decode(
                "success response missing accessToken or user".to_owned(),
            )),
        }
    }
}

/// A cart line item. Fetched after sign-in for the nav badge and checkout
/// screens; opaque to this layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItem(pub serde_json::Value);
