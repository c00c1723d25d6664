//! Route-level page components.

pub mod dashboard;
pub mod home;
pub mod instructor;
pub mod login;
pub mod register;
