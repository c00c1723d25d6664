//! Navigation guards gating routes on session state.
//!
//! No guard decides before initialization completes: until then it renders
//! the loading screen, which avoids redirecting during the startup race
//! while the stored token is still being resolved. The decision core is
//! pure; the components wrap it in the redirect effect.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::LoadingScreen;
use crate::net::types::User;
use crate::routes;
use crate::state::auth::{Session, use_auth};

/// Outcome of a guard check for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initialization has not completed; render a loading state.
    Loading,
    Allow,
    Redirect(String),
}

/// Require an authenticated session; visitors go to login, keeping the
/// requested path for the post-login return.
#[must_use]
pub fn decide_auth(session: &Session, requested_path: &str) -> GuardDecision {
    if !session.is_initialized {
        return GuardDecision::Loading;
    }
    if session.is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(login_redirect(requested_path))
    }
}

/// Require a guest; authenticated users go to the landing page.
#[must_use]
pub fn decide_guest(session: &Session) -> GuardDecision {
    if !session.is_initialized {
        return GuardDecision::Loading;
    }
    if session.is_authenticated {
        GuardDecision::Redirect(routes::PATH_AFTER_LOGIN.to_owned())
    } else {
        GuardDecision::Allow
    }
}

/// Require an authenticated user passing a role predicate. Guests go to
/// login; signed-in users without the role go to the public landing page.
#[must_use]
pub fn decide_role(
    session: &Session,
    requested_path: &str,
    predicate: fn(&User) -> bool,
) -> GuardDecision {
    if !session.is_initialized {
        return GuardDecision::Loading;
    }
    match &session.user {
        Some(user) if session.is_authenticated => {
            if predicate(user) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(routes::HOME.to_owned())
            }
        }
        _ => GuardDecision::Redirect(login_redirect(requested_path)),
    }
}

fn login_redirect(requested_path: &str) -> String {
    format!(
        "{}?returnTo={}",
        routes::AUTH_LOGIN,
        urlencoding::encode(requested_path)
    )
}

/// Gate children behind an authenticated session.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let decision =
        Memo::new(move |_| decide_auth(&auth.session().get(), &location.pathname.get()));
    guarded(decision, children)
}

/// Gate children behind a guest (signed-out) session.
#[component]
pub fn GuestGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| decide_guest(&auth.session().get()));
    guarded(decision, children)
}

/// Gate children behind an authenticated session passing `predicate`.
#[component]
pub fn RoleGuard(predicate: fn(&User) -> bool, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let decision = Memo::new(move |_| {
        decide_role(&auth.session().get(), &location.pathname.get(), predicate)
    });
    guarded(decision, children)
}

/// Shared render: follow redirects in an effect, show children on `Allow`,
/// and the loading screen otherwise.
fn guarded(decision: Memo<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(&to, NavigateOptions::default());
        }
    });

    move || match decision.get() {
        GuardDecision::Allow => children(),
        GuardDecision::Loading | GuardDecision::Redirect(_) => {
            view! { <LoadingScreen/> }.into_any()
        }
    }
}
