use super::*;

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

fn sample_user() -> User {
    User(serde_json::json!({ "id": 1, "name": "A", "role": "student" }))
}

fn authenticated_session() -> Session {
    Session::default().reduce(AuthAction::Initialize {
        user: Some(sample_user()),
    })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_uninitialized() {
    let session = Session::default();
    assert!(!session.is_initialized);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn initialize_with_user_authenticates() {
    let session = Session::default().reduce(AuthAction::Initialize {
        user: Some(sample_user()),
    });
    assert!(session.is_authenticated);
    assert_eq!(session.user, Some(sample_user()));
}

#[test]
fn initialize_with_user_sets_initialized() {
    let session = Session::default().reduce(AuthAction::Initialize {
        user: Some(sample_user()),
    });
    assert!(session.is_initialized);
}

#[test]
fn initialize_without_user_sets_initialized() {
    let session = Session::default().reduce(AuthAction::Initialize { user: None });
    assert!(session.is_initialized);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

// =============================================================
// Login / Register
// =============================================================

#[test]
fn login_authenticates_with_user() {
    let start = Session::default().reduce(AuthAction::Initialize { user: None });
    let session = start.reduce(AuthAction::Login {
        user: sample_user(),
    });
    assert!(session.is_authenticated);
    assert_eq!(session.user, Some(sample_user()));
}

#[test]
fn login_preserves_initialized_flag() {
    let start = Session::default().reduce(AuthAction::Initialize { user: None });
    let session = start.reduce(AuthAction::Login {
        user: sample_user(),
    });
    assert!(session.is_initialized);
}

#[test]
fn register_authenticates_with_user() {
    let start = Session::default().reduce(AuthAction::Initialize { user: None });
    let session = start.reduce(AuthAction::Register {
        user: sample_user(),
    });
    assert!(session.is_authenticated);
    assert_eq!(session.user, Some(sample_user()));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_user_and_authentication() {
    let session = authenticated_session().reduce(AuthAction::Logout);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

#[test]
fn logout_keeps_session_initialized() {
    let session = authenticated_session().reduce(AuthAction::Logout);
    assert!(session.is_initialized);
}

#[test]
fn logout_before_initialize_stays_uninitialized() {
    let session = Session::default().reduce(AuthAction::Logout);
    assert!(!session.is_initialized);
}

// =============================================================
// Invariant: authenticated implies a user is present
// =============================================================

#[test]
fn authenticated_always_implies_user() {
    let actions = [
        AuthAction::Initialize { user: None },
        AuthAction::Login {
            user: sample_user(),
        },
        AuthAction::Logout,
        AuthAction::Register {
            user: sample_user(),
        },
        AuthAction::Initialize {
            user: Some(sample_user()),
        },
        AuthAction::Logout,
    ];

    let mut session = Session::default();
    for action in actions {
        session = session.reduce(action);
        assert!(!session.is_authenticated || session.user.is_some());
    }
}

// =============================================================
// Single-flight initialize
//
// Without a stored token (the only case reachable off-browser) the
// initialize future never suspends, so a single poll completes it.
// =============================================================

fn fresh_auth() -> Auth {
    Auth {
        session: RwSignal::new(Session::default()),
        signed_in: RwSignal::new(0),
        init_started: RwSignal::new(false),
    }
}

fn drive<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("initialize should complete without suspending"),
    }
}

#[test]
fn initialize_without_token_lands_logged_out() {
    let owner = Owner::new();
    owner.set();

    let auth = fresh_auth();
    drive(auth.initialize());

    let session = auth.session.get_untracked();
    assert!(session.is_initialized);
    assert!(!session.is_authenticated);
    assert!(auth.init_started.get_untracked());
    assert_eq!(auth.signed_in.get_untracked(), 0);
}

#[test]
fn second_initialize_is_a_no_op() {
    let owner = Owner::new();
    owner.set();

    let auth = fresh_auth();
    drive(auth.initialize());

    // Sign in between the two calls; a rerun would reset the session.
    auth.dispatch(AuthAction::Login {
        user: sample_user(),
    });
    drive(auth.initialize());

    let session = auth.session.get_untracked();
    assert!(session.is_authenticated);
    assert_eq!(session.user, Some(sample_user()));
    assert!(session.is_initialized);
    assert_eq!(auth.signed_in.get_untracked(), 1);
}

#[test]
fn reapplying_login_after_logout_is_clean() {
    let session = authenticated_session()
        .reduce(AuthAction::Logout)
        .reduce(AuthAction::Login {
            user: sample_user(),
        });
    assert!(session.is_authenticated);
    assert!(session.is_initialized);
    assert_eq!(session.user, Some(sample_user()));
}
