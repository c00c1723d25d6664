use super::*;

// =============================================================
// Path constants
// =============================================================

#[test]
fn all_paths_are_absolute() {
    for path in [HOME, AUTH_LOGIN, AUTH_REGISTER, DASHBOARD, INSTRUCTOR] {
        assert!(path.starts_with('/'), "{path} should start with /");
    }
}

#[test]
fn post_login_landing_is_the_dashboard() {
    assert_eq!(PATH_AFTER_LOGIN, DASHBOARD);
}
