//! Route path constants shared by the router, guards, and pages.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const DASHBOARD: &str = "/dashboard";
pub const INSTRUCTOR: &str = "/instructor";

/// Where authenticated users land by default (guest-guard redirects,
/// post-login navigation without a `returnTo`).
pub const PATH_AFTER_LOGIN: &str = DASHBOARD;
