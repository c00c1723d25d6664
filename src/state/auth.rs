//! Authentication session state machine.
//!
//! ARCHITECTURE
//! ============
//! `Session` is an immutable snapshot replaced atomically on every
//! transition; the four `AuthAction` variants are the only way it changes.
//! The `Auth` handle owns the token store and the gateway calls; UI code
//! observes the session signal and never mutates it directly.
//!
//! Initialization is fail-open-to-logged-out: a missing or expired token,
//! or a failed profile fetch, logs a warning and lands in Unauthenticated —
//! never an error screen. Login and register, by contrast, return their
//! errors so the forms can show them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::auth::{token, token_store};
use crate::net::api::{self, ApiError};
use crate::net::types::User;

/// Authentication session snapshot.
///
/// Invariant: `is_authenticated` implies `user.is_some()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    /// Flips to true exactly once, when the first initialization attempt
    /// completes — success or failure.
    pub is_initialized: bool,
    pub user: Option<User>,
}

/// Session transitions. One variant per operation; [`Session::reduce`] is
/// exhaustive, so adding a variant forces a handler.
#[derive(Clone, Debug)]
pub enum AuthAction {
    /// Startup resolution: `Some(user)` restores a session, `None` lands
    /// logged out. Either way the session becomes initialized.
    Initialize { user: Option<User> },
    Login { user: User },
    Register { user: User },
    Logout,
}

impl Session {
    /// Apply a transition, returning the next snapshot.
    #[must_use]
    pub fn reduce(self, action: AuthAction) -> Session {
        match action {
            AuthAction::Initialize { user } => Session {
                is_authenticated: user.is_some(),
                is_initialized: true,
                user,
            },
            AuthAction::Login { user } | AuthAction::Register { user } => Session {
                is_authenticated: true,
                user: Some(user),
                ..self
            },
            AuthAction::Logout => Session {
                is_authenticated: false,
                user: None,
                ..self
            },
        }
    }
}

/// Context handle over the session. Cheap to copy — signals only.
#[derive(Clone, Copy)]
pub struct Auth {
    session: RwSignal<Session>,
    /// Bumped on every transition into the authenticated state via
    /// initialize or login. The cart module subscribes to this counter
    /// instead of being called from here.
    signed_in: RwSignal<u64>,
    init_started: RwSignal<bool>,
}

impl Auth {
    /// Create the handle and register it in the Leptos context tree.
    #[must_use]
    pub fn provide() -> Self {
        let auth = Self {
            session: RwSignal::new(Session::default()),
            signed_in: RwSignal::new(0),
            init_started: RwSignal::new(false),
        };
        provide_context(auth);
        auth
    }

    /// Read handle for the session snapshot.
    #[must_use]
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Generation counter for successful sign-ins.
    #[must_use]
    pub fn signed_in(&self) -> ReadSignal<u64> {
        self.signed_in.read_only()
    }

    /// Atomic snapshot replacement; the only write path to the session.
    fn dispatch(&self, action: AuthAction) {
        let bump = matches!(
            &action,
            AuthAction::Initialize { user: Some(_) } | AuthAction::Login { .. }
        );
        let next = self.session.get_untracked().reduce(action);
        self.session.set(next);
        if bump {
            self.signed_in.update(|n| *n += 1);
        }
    }

    /// Resolve the stored token once at startup.
    ///
    /// Single-flight: repeated calls (component remounts, double effects)
    /// are no-ops after the first.
    pub async fn initialize(self) {
        if self.init_started.get_untracked() {
            return;
        }
        self.init_started.set(true);

        let user = match token_store::load() {
            Some(stored) if token::is_valid(&stored) => match api::fetch_account().await {
                Ok(user) => Some(user),
                Err(err) => {
                    leptos::logging::warn!("session restore failed: {err}");
                    None
                }
            },
            Some(_) => {
                leptos::logging::log!("stored token expired; starting logged out");
                None
            }
            None => None,
        };

        self.dispatch(AuthAction::Initialize { user });
    }

    /// Sign in. On success the token is persisted and the session becomes
    /// authenticated.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] when the server declares the attempt failed;
    /// the session and token store are left untouched. Transport and shape
    /// errors likewise pass through unchanged.
    pub async fn login(self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = api::login(email, password).await?;
        token_store::save(&payload.access_token);
        self.dispatch(AuthAction::Login { user: payload.user });
        Ok(())
    }

    /// Create an account. Same contract as [`Auth::login`].
    ///
    /// # Errors
    ///
    /// See [`Auth::login`].
    pub async fn register(
        self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        let payload = api::register(email, password, first_name, last_name).await?;
        token_store::save(&payload.access_token);
        self.dispatch(AuthAction::Register { user: payload.user });
        Ok(())
    }

    /// Sign out: clear the stored token and drop to Unauthenticated.
    /// Unconditional; cannot fail.
    pub fn logout(self) {
        token_store::clear();
        self.dispatch(AuthAction::Logout);
    }
}

/// Fetch the auth handle from context. Panics outside the `App` tree.
#[must_use]
pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}
