//! REST gateway to the platform API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each attaching the
//! stored bearer token. Server-side (SSR): stubs returning errors since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 maps to [`ApiError::Unauthorized`] and is returned to the caller;
//! the gateway never clears the token or touches the session itself. The
//! auth state machine stays the single owner of session transitions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthPayload, CartItem, User};

/// Errors surfaced by the REST gateway.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport or server failure (network down, 5xx, unexpected status).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// Declared failure: HTTP success with `success: false` in the body.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Map a non-OK HTTP status to an [`ApiError`].
#[must_use]
pub fn error_for_status(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Network(format!("unexpected status {status}"))
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let mut req = gloo_net::http::Request::get(path);
    if let Some(token) = crate::auth::token_store::load() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_for_status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let mut req = gloo_net::http::Request::post(path);
    if let Some(token) = crate::auth::token_store::load() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_for_status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the signed-in user's profile from `GET /api/my-account`.
pub async fn fetch_account() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct AccountResponse {
            user: User,
        }
        let body: AccountResponse = get_json("/api/my-account").await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] when the server declares the attempt failed;
/// transport and shape errors per the taxonomy above.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let envelope: super::types::AuthEnvelope = post_json("/api/auth/login", &body).await?;
        envelope.try_into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "firstName": first_name,
            "lastName": last_name,
        });
        let envelope: super::types::AuthEnvelope = post_json("/api/auth/register", &body).await?;
        envelope.try_into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, first_name, last_name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the shopping cart from `GET /api/cart`.
///
/// Called fire-and-forget after sign-in; the result never merges into the
/// session.
pub async fn fetch_cart() -> Result<Vec<CartItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/cart").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
