//! Bearer token persistence in `localStorage`.
//!
//! Storage only — no validation happens here. The token survives page
//! reloads within the same browser profile under a single key. Requires a
//! browser environment; server-side builds see an always-empty store.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "accessToken";

/// Persist the bearer token, replacing any previous one.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Return the last saved token, if any.
#[must_use]
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored token. A missing token is not an error.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
